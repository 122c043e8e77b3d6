//! Resolver configuration
//!
//! Two ways to configure a [`crate::DescriptionResolver`]:
//! - Builder: `ResolverConfig::default().bundle(..).strict_members(true)`
//! - YAML v1 file (used by the `wbp-describe` CLI)
//!
//! ```rust,ignore
//! use wbp_descriptions::config::ResolverConfig;
//!
//! let config = ResolverConfig::from_yaml("wbp.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod resolver_config;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::{BundleConfig, CacheConfig, ConfigExportV1};
pub use resolver_config::ResolverConfig;
