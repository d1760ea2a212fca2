//! # ServiceHub Core
//!
//! Core business logic for the password reset flow.
//! This crate contains the verification record and account entities, the
//! reset service state machine, repository interfaces for the verification
//! store and user directory, and the error types shared with the outer layers.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
