// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, FieldType, FormTemplate, Tab, TabId, TemplateField, TemplateId, validate_tab,
    validate_tabs, validate_template, validate_templates,
};

fn make_tab(tab_id: &str) -> Tab {
    Tab::new(TabId::new(tab_id), "Opening Duties", 10)
}

fn make_template(template_id: &str, field_names: &[&str]) -> FormTemplate {
    let fields = field_names
        .iter()
        .map(|name| TemplateField::new(name, "Label", FieldType::Text, false))
        .collect();
    FormTemplate::new(TemplateId::new(template_id), "Ice Checks", fields)
}

#[test]
fn test_valid_tab_passes() {
    assert!(validate_tab(&make_tab("tab-1")).is_ok());
}

#[test]
fn test_empty_tab_id_rejected() {
    let tab = make_tab("");

    let result = validate_tab(&tab);

    assert!(matches!(result, Err(DomainError::InvalidTabId(_))));
}

#[test]
fn test_empty_tab_name_rejected() {
    let mut tab = make_tab("tab-1");
    tab.name = String::new();

    let result = validate_tab(&tab);

    assert_eq!(
        result,
        Err(DomainError::InvalidTabName {
            tab_id: TabId::new("tab-1"),
        })
    );
}

#[test]
fn test_unique_tab_ids_pass() {
    let tabs = vec![make_tab("tab-1"), make_tab("tab-2"), make_tab("tab-3")];

    assert!(validate_tabs(&tabs).is_ok());
}

#[test]
fn test_duplicate_tab_ids_rejected() {
    let tabs = vec![make_tab("tab-1"), make_tab("tab-2"), make_tab("tab-1")];

    let result = validate_tabs(&tabs);

    assert_eq!(
        result,
        Err(DomainError::DuplicateTabId {
            tab_id: TabId::new("tab-1"),
        })
    );
}

#[test]
fn test_empty_catalog_is_valid() {
    assert!(validate_tabs(&[]).is_ok());
}

#[test]
fn test_valid_template_passes() {
    let template = make_template("tpl-1", &["surface_temp", "water_level"]);

    assert!(validate_template(&template).is_ok());
}

#[test]
fn test_template_with_no_fields_is_valid() {
    let template = make_template("tpl-1", &[]);

    assert!(validate_template(&template).is_ok());
}

#[test]
fn test_empty_template_id_rejected() {
    let template = make_template("", &["surface_temp"]);

    let result = validate_template(&template);

    assert!(matches!(result, Err(DomainError::InvalidTemplateId(_))));
}

#[test]
fn test_empty_template_name_rejected() {
    let mut template = make_template("tpl-1", &["surface_temp"]);
    template.name = String::new();

    let result = validate_template(&template);

    assert_eq!(
        result,
        Err(DomainError::InvalidTemplateName {
            template_id: TemplateId::new("tpl-1"),
        })
    );
}

#[test]
fn test_empty_field_name_rejected() {
    let template = make_template("tpl-1", &["surface_temp", ""]);

    let result = validate_template(&template);

    assert_eq!(
        result,
        Err(DomainError::InvalidFieldName {
            template_id: TemplateId::new("tpl-1"),
        })
    );
}

#[test]
fn test_duplicate_field_names_rejected() {
    let template = make_template("tpl-1", &["surface_temp", "water_level", "surface_temp"]);

    let result = validate_template(&template);

    assert_eq!(
        result,
        Err(DomainError::DuplicateFieldName {
            template_id: TemplateId::new("tpl-1"),
            field_name: String::from("surface_temp"),
        })
    );
}

#[test]
fn test_duplicate_field_names_across_templates_allowed() {
    let templates = vec![
        make_template("tpl-1", &["surface_temp"]),
        make_template("tpl-2", &["surface_temp"]),
    ];

    assert!(validate_templates(&templates).is_ok());
}

#[test]
fn test_duplicate_template_ids_rejected() {
    let templates = vec![
        make_template("tpl-1", &["a"]),
        make_template("tpl-1", &["b"]),
    ];

    let result = validate_templates(&templates);

    assert_eq!(
        result,
        Err(DomainError::DuplicateTemplateId {
            template_id: TemplateId::new("tpl-1"),
        })
    );
}
