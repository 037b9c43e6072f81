use async_trait::async_trait;
use tracing::info;

use cowork_core::domain::Lead;
use cowork_core::error::DomainError;
use cowork_core::repositories::LeadRepository;

use super::client::BackendClient;

/// Writes leads with `POST /api/v1/leads`. Never cached, never retried.
pub struct HttpLeadRepository {
    client: BackendClient,
}

impl HttpLeadRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LeadRepository for HttpLeadRepository {
    async fn create(&self, lead: &Lead) -> Result<(), DomainError> {
        self.client.post_json(&["api", "v1", "leads"], lead).await?;
        info!("Lead accepted by backend ({})", lead.enquired_for.as_str());
        Ok(())
    }
}
