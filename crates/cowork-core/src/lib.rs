//! # CoWork Core
//!
//! Domain entities, lead forms, repository ports, and the fail-soft services
//! that pages render from.

pub mod domain;
pub mod forms;
pub mod repositories;
pub mod services;
pub mod seo;
pub mod sitemap;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
