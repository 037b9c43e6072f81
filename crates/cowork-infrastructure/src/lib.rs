//! # CoWork Infrastructure
//!
//! HTTP adapters for the listing backend, with a time-based response cache.

pub mod backend;

pub use backend::{
    BackendClient, HttpLeadRepository, HttpLocationRepository, HttpSpaceRepository,
    RevalidationCache,
};
