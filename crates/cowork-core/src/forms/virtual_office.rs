//! Virtual office enquiry form, optionally pre-filled with the city from the route.

use serde::{Deserialize, Serialize};
use validator::Validate;

use cowork_shared::utils::capitalize_first;

use super::{optional, trim_in_place, LeadForm};
use crate::domain::{Lead, LeadSource};

pub const SERVICE_TYPES: [&str; 4] = [
    "GST Registration",
    "Business Registration",
    "Mailing Address",
    "Virtual Office",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VirtualOfficeForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 10, message = "Phone number must be at least 10 digits"))]
    pub phone: String,

    #[validate(length(min = 1, message = "Please select a service type"))]
    pub service_type: String,

    #[validate(length(min = 1, message = "Please select a city"))]
    pub location: String,

    pub message: String,

    /// City the form was rendered for; the reset target for `location`.
    #[serde(skip)]
    pub selected_city: String,
}

impl VirtualOfficeForm {
    /// Empty form with `location` defaulted to the capitalized route city.
    pub fn for_city(city: &str) -> Self {
        let display_city = capitalize_first(city);
        Self {
            location: display_city.clone(),
            selected_city: display_city,
            ..Self::default()
        }
    }

    /// Attach the route city to a posted form (it is not part of the body).
    pub fn rendered_for(mut self, city: &str) -> Self {
        self.selected_city = capitalize_first(city);
        self
    }
}

impl LeadForm for VirtualOfficeForm {
    fn trimmed(mut self) -> Self {
        for field in [
            &mut self.name,
            &mut self.email,
            &mut self.phone,
            &mut self.service_type,
            &mut self.location,
        ] {
            trim_in_place(field);
        }
        self
    }

    fn to_lead(&self) -> Lead {
        Lead {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            space_type: self.service_type.clone(),
            location: optional(&self.location),
            message: optional(&self.message),
            enquired_for: LeadSource::VirtualOfficePage,
        }
    }

    fn reset(&self) -> Self {
        Self::for_city(&self.selected_city)
    }
}
