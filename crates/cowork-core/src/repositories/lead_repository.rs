//! Lead repository trait (port)

use async_trait::async_trait;

use crate::domain::Lead;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn create(&self, lead: &Lead) -> Result<(), DomainError>;
}
