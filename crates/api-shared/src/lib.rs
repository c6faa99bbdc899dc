//! # API Shared
//!
//! Shared wire types and services for the derm HTTP API.
//!
//! Contains:
//! - Request and response bodies with OpenAPI schemas (`types` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the service binary.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
