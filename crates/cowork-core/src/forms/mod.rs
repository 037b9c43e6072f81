//! Lead-capture forms: validation schemas and the state a form is rendered from.

pub mod contact;
pub mod virtual_office;

use std::collections::BTreeMap;

use serde::Serialize;
use validator::{Validate, ValidationErrors};

use crate::domain::Lead;

pub use contact::{ContactForm, ENQUIRY_TYPES};
pub use virtual_office::{VirtualOfficeForm, SERVICE_TYPES};

pub const SUCCESS_MESSAGE: &str = "Thank you! We will contact you soon.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// First error message per field, keyed by the form field name.
pub type FieldErrors = BTreeMap<String, String>;

/// A validated form that can be turned into a lead.
pub trait LeadForm: Validate + Clone + Send + Sync {
    /// The form with surrounding whitespace stripped from its single-line
    /// fields. Validation and the lead both work on this value.
    fn trimmed(self) -> Self;

    fn to_lead(&self) -> Lead;

    /// Values the form returns to after a successful submission.
    fn reset(&self) -> Self;

    fn field_errors(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => collect_field_errors(&errors),
        }
    }
}

pub fn collect_field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let message = errs.first().map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {}", field))
            })?;
            Some((field.to_string(), message))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// One-shot toast shown above the form after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success() -> Self {
        Self { kind: NoticeKind::Success, message: SUCCESS_MESSAGE.to_string() }
    }

    pub fn failure() -> Self {
        Self { kind: NoticeKind::Error, message: FAILURE_MESSAGE.to_string() }
    }
}

/// What a form section renders: current values, field errors, optional notice.
#[derive(Debug, Clone, Serialize)]
pub struct FormState<F> {
    pub values: F,
    pub errors: FieldErrors,
    pub notice: Option<Notice>,
}

impl<F> FormState<F> {
    pub fn blank(values: F) -> Self {
        Self { values, errors: FieldErrors::new(), notice: None }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self.notice, Some(Notice { kind: NoticeKind::Success, .. }))
    }
}

pub(crate) fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Trimmed value, or `None` when blank.
pub(crate) fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
