//! Type definitions shared between layers
//!
//! - `response` - API response envelope and health checks

pub mod response;

pub use response::{ApiResponse, HealthResponse, HealthStatus};
