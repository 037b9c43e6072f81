//! # CoWork API
//!
//! HTTP handlers, page views, the mock listing API, and the router.

pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
pub mod views;

pub use routes::build_router;
pub use state::AppState;
