// ============================================================================
// CoWork Core - Contact Form
// File: crates/cowork-core/src/forms/contact.rs
// Description: Contact page enquiry form
// ============================================================================

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{optional, trim_in_place, LeadForm};
use crate::domain::{Lead, LeadSource};

pub const ENQUIRY_TYPES: [&str; 2] = ["Looking for Space", "Listing Space"];

fn validate_enquiry_type(value: &str) -> Result<(), ValidationError> {
    if ENQUIRY_TYPES.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("enquiry_type")
            .with_message(Cow::Borrowed("Please select an enquiry type")))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 10, message = "Phone number must be at least 10 digits"))]
    pub phone: String,

    #[validate(custom(function = "validate_enquiry_type"))]
    pub enquiry_type: String,

    pub message: String,
}

impl LeadForm for ContactForm {
    fn trimmed(mut self) -> Self {
        for field in [&mut self.name, &mut self.email, &mut self.phone, &mut self.enquiry_type] {
            trim_in_place(field);
        }
        self
    }

    fn to_lead(&self) -> Lead {
        Lead {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            space_type: self.enquiry_type.clone(),
            location: None,
            message: optional(&self.message),
            enquired_for: LeadSource::ContactPage,
        }
    }

    fn reset(&self) -> Self {
        Self::default()
    }
}
