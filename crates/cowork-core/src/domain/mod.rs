//! # CoWork Core - Domain Module
//!
//! Records owned by the listing backend. This site only reads workspaces and
//! locations and only writes leads.

pub mod workspace;
pub mod location;
pub mod lead;

pub use workspace::{
    City, Pricing, SpaceContact, SpaceFeatures, SpaceLocation, SpaceStatus, Workspace,
    WorkspaceQuery, WorkspaceResponse, WorkspacesResponse,
};
pub use location::{Location, LocationsResponse};
pub use lead::{Lead, LeadSource};
