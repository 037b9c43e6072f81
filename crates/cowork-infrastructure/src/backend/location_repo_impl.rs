use async_trait::async_trait;

use cowork_core::domain::LocationsResponse;
use cowork_core::error::DomainError;
use cowork_core::repositories::LocationRepository;

use super::client::BackendClient;

pub struct HttpLocationRepository {
    client: BackendClient,
}

impl HttpLocationRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LocationRepository for HttpLocationRepository {
    async fn list(&self) -> Result<LocationsResponse, DomainError> {
        self.client.get_json(&["api", "v1", "locations"], &[]).await
    }
}
