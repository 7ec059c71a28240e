// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use rinkops_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while assembling a report overview.
///
/// The derivation engines themselves never fail; an overview request can
/// only be rejected before derivation starts, when the configuration
/// snapshot it was handed is inconsistent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OverviewError {
    /// The tab catalog or template snapshot failed validation.
    #[error("Invalid report configuration: {0}")]
    Configuration(#[from] DomainError),
}
