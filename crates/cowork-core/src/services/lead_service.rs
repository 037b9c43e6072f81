//! Lead submission: validate, send once, and decide what the form shows next.

use std::sync::Arc;

use tracing::{error, info};

use cowork_shared::utils::mask_email;

use crate::forms::{FormState, LeadForm, Notice};
use crate::repositories::LeadRepository;

#[derive(Clone)]
pub struct LeadService {
    leads: Arc<dyn LeadRepository>,
}

impl LeadService {
    pub fn new(leads: Arc<dyn LeadRepository>) -> Self {
        Self { leads }
    }

    /// The form is trimmed first, so what is validated is exactly what is sent.
    /// Invalid input is returned with field errors and nothing is sent.
    /// A sent lead resets the form and carries a success notice; a failed
    /// send keeps the values and carries a failure notice. No retry.
    pub async fn submit<F: LeadForm>(&self, form: F) -> FormState<F> {
        let form = form.trimmed();
        let errors = form.field_errors();
        if !errors.is_empty() {
            return FormState { values: form, errors, notice: None };
        }

        let lead = form.to_lead();
        match self.leads.create(&lead).await {
            Ok(()) => {
                info!(
                    "Lead created from {} for {}",
                    lead.enquired_for.as_str(),
                    mask_email(&lead.email)
                );
                FormState { values: form.reset(), errors: Default::default(), notice: Some(Notice::success()) }
            }
            Err(e) => {
                error!("Error submitting lead from {}: {}", lead.enquired_for.as_str(), e);
                FormState { values: form, errors: Default::default(), notice: Some(Notice::failure()) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LeadSource;
    use crate::error::DomainError;
    use crate::forms::{ContactForm, NoticeKind, VirtualOfficeForm};
    use crate::repositories::MockLeadRepository;

    fn contact() -> ContactForm {
        ContactForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            enquiry_type: "Listing Space".to_string(),
            message: "We have 40 seats".to_string(),
        }
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let mut leads = MockLeadRepository::new();
        leads.expect_create().times(0);
        let service = LeadService::new(Arc::new(leads));

        let form = ContactForm { email: "not-an-email".to_string(), ..contact() };
        let state = service.submit(form.clone()).await;
        assert_eq!(state.values, form);
        assert_eq!(state.errors["email"], "Invalid email address");
        assert!(state.notice.is_none());
    }

    #[tokio::test]
    async fn test_whitespace_only_name_is_not_sent() {
        let mut leads = MockLeadRepository::new();
        leads.expect_create().times(0);
        let service = LeadService::new(Arc::new(leads));

        let state = service.submit(ContactForm { name: "   ".to_string(), ..contact() }).await;
        assert_eq!(state.errors["name"], "Name is required");
        assert!(state.values.name.is_empty());
        assert!(state.notice.is_none());
    }

    #[tokio::test]
    async fn test_padded_short_phone_is_not_sent() {
        let mut leads = MockLeadRepository::new();
        leads.expect_create().times(0);
        let service = LeadService::new(Arc::new(leads));

        let state = service.submit(ContactForm { phone: "123456789 ".to_string(), ..contact() }).await;
        assert_eq!(state.errors["phone"], "Phone number must be at least 10 digits");
    }

    #[tokio::test]
    async fn test_sent_lead_matches_validated_values() {
        let mut leads = MockLeadRepository::new();
        leads
            .expect_create()
            .withf(|lead| lead.name == "Asha" && lead.phone == "9876543210" && lead.email == "asha@example.com")
            .times(1)
            .returning(|_| Ok(()));
        let service = LeadService::new(Arc::new(leads));

        let form = ContactForm {
            name: "  Asha  ".to_string(),
            email: " asha@example.com ".to_string(),
            phone: " 9876543210 ".to_string(),
            ..contact()
        };
        assert!(service.submit(form).await.is_accepted());
    }

    #[tokio::test]
    async fn test_success_resets_form_with_one_notice() {
        let mut leads = MockLeadRepository::new();
        leads
            .expect_create()
            .withf(|lead| lead.enquired_for == LeadSource::ContactPage && lead.space_type == "Listing Space")
            .times(1)
            .returning(|_| Ok(()));
        let service = LeadService::new(Arc::new(leads));

        let state = service.submit(contact()).await;
        assert_eq!(state.values, ContactForm::default());
        assert!(state.errors.is_empty());
        assert!(state.is_accepted());
        assert_eq!(state.notice, Some(Notice::success()));
    }

    #[tokio::test]
    async fn test_failure_keeps_values() {
        let mut leads = MockLeadRepository::new();
        leads
            .expect_create()
            .times(1)
            .returning(|_| Err(DomainError::BackendStatus(500)));
        let service = LeadService::new(Arc::new(leads));

        let state = service.submit(contact()).await;
        assert_eq!(state.values, contact());
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Error));
        assert!(!state.is_accepted());
    }

    #[tokio::test]
    async fn test_virtual_office_reset_keeps_city() {
        let mut leads = MockLeadRepository::new();
        leads
            .expect_create()
            .withf(|lead| lead.location.as_deref() == Some("Kochi"))
            .returning(|_| Ok(()));
        let service = LeadService::new(Arc::new(leads));

        let form = VirtualOfficeForm {
            name: "Rahul".to_string(),
            email: "rahul@example.com".to_string(),
            phone: "9876543210".to_string(),
            service_type: "Virtual Office".to_string(),
            ..VirtualOfficeForm::for_city("kochi")
        };
        let state = service.submit(form).await;
        assert!(state.is_accepted());
        assert_eq!(state.values, VirtualOfficeForm::for_city("kochi"));
    }
}
