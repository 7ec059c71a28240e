// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared constructors for API tests.

use rinkops_domain::{
    FieldType, FormTemplate, RoleId, Tab, TabFormData, TabId, TemplateField, TemplateId,
};
use std::collections::HashMap;
use time::{Date, Month};

/// A fixed report date for tests.
pub fn report_date() -> Date {
    Date::from_calendar_date(2026, Month::August, 6).unwrap()
}

/// Builds a tab with the given shape.
pub fn make_tab(
    tab_id: &str,
    name: &str,
    display_order: i32,
    is_required: bool,
    restrictions: &[&str],
) -> Tab {
    let mut tab = Tab::new(TabId::new(tab_id), name, display_order);
    tab.is_required = is_required;
    tab.role_restrictions = restrictions.iter().map(|r| RoleId::new(r)).collect();
    tab
}

/// Builds a template-backed tab.
pub fn make_template_tab(
    tab_id: &str,
    name: &str,
    display_order: i32,
    is_required: bool,
    template_id: &str,
) -> Tab {
    let mut tab = make_tab(tab_id, name, display_order, is_required, &[]);
    tab.form_template_id = Some(TemplateId::new(template_id));
    tab
}

/// Builds a template whose fields are all required text inputs.
pub fn make_template(template_id: &str, field_names: &[&str]) -> FormTemplate {
    let fields = field_names
        .iter()
        .map(|name| TemplateField::new(name, "Label", FieldType::Text, true))
        .collect();
    FormTemplate::new(TemplateId::new(template_id), "Template", fields)
}

/// Builds a checklist draft payload.
pub fn checklist_draft(entries: &[(&str, bool)], notes: &str) -> TabFormData {
    TabFormData::Checklist {
        items: entries
            .iter()
            .map(|(name, checked)| ((*name).to_owned(), *checked))
            .collect(),
        notes: notes.to_owned(),
    }
}

/// Builds a drafts map from tab id / payload pairs.
pub fn drafts(entries: Vec<(&str, TabFormData)>) -> HashMap<TabId, TabFormData> {
    entries
        .into_iter()
        .map(|(tab_id, data)| (TabId::new(tab_id), data))
        .collect()
}
