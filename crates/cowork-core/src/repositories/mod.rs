//! Repository traits (ports)

pub mod space_repository;
pub mod location_repository;
pub mod lead_repository;

pub use space_repository::SpaceRepository;
pub use location_repository::LocationRepository;
pub use lead_repository::LeadRepository;

#[cfg(test)]
pub use space_repository::MockSpaceRepository;
#[cfg(test)]
pub use location_repository::MockLocationRepository;
#[cfg(test)]
pub use lead_repository::MockLeadRepository;
