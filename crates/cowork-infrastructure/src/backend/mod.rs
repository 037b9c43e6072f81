//! Listing backend module (REST adapters)

pub mod cache;
pub mod client;
pub mod space_repo_impl;
pub mod location_repo_impl;
pub mod lead_repo_impl;

pub use cache::RevalidationCache;
pub use client::BackendClient;
pub use space_repo_impl::HttpSpaceRepository;
pub use location_repo_impl::HttpLocationRepository;
pub use lead_repo_impl::HttpLeadRepository;
