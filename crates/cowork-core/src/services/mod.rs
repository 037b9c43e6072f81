//! Domain services

pub mod listing_service;
pub mod lead_service;

pub use listing_service::ListingService;
pub use lead_service::LeadService;
