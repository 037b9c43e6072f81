//! Workspace listing repository trait (port)

use async_trait::async_trait;

use crate::domain::{WorkspaceQuery, WorkspaceResponse, WorkspacesResponse};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpaceRepository: Send + Sync {
    async fn list(&self, query: &WorkspaceQuery) -> Result<WorkspacesResponse, DomainError>;
    async fn find_by_id(&self, id: &str) -> Result<WorkspaceResponse, DomainError>;
    async fn featured(&self) -> Result<WorkspacesResponse, DomainError>;
}
