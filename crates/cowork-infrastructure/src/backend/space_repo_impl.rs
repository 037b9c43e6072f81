// ============================================================================
// CoWork Infrastructure - HTTP Space Repository
// File: crates/cowork-infrastructure/src/backend/space_repo_impl.rs
// ============================================================================

use async_trait::async_trait;

use cowork_core::domain::{WorkspaceQuery, WorkspaceResponse, WorkspacesResponse};
use cowork_core::error::DomainError;
use cowork_core::repositories::SpaceRepository;

use super::client::BackendClient;

pub struct HttpSpaceRepository {
    client: BackendClient,
}

impl HttpSpaceRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SpaceRepository for HttpSpaceRepository {
    async fn list(&self, query: &WorkspaceQuery) -> Result<WorkspacesResponse, DomainError> {
        self.client
            .get_json(&["api", "v1", "spaces"], &query.to_pairs())
            .await
    }

    async fn find_by_id(&self, id: &str) -> Result<WorkspaceResponse, DomainError> {
        self.client.get_json(&["api", "v1", "spaces", id], &[]).await
    }

    async fn featured(&self) -> Result<WorkspacesResponse, DomainError> {
        self.client
            .get_json(&["api", "v1", "spaces", "featured"], &[])
            .await
    }
}
