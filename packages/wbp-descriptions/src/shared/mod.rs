//! Shared module - Common types and utilities
//!
//! Types shared across all features: the class model and Java name helpers.

pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;
