//! Location repository trait (port)

use async_trait::async_trait;

use crate::domain::LocationsResponse;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn list(&self) -> Result<LocationsResponse, DomainError>;
}
