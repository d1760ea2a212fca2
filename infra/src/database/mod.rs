//! Database module - MySQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management and migrations
//! - The MySQL verification store
//! - The MySQL user directory

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlUserDirectory, MySqlVerificationStore};
