/*
 * wbp-descriptions - Component description resolver
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Class model and Java name helpers
 * - features/    : class_model → resources → metadata → description
 * - config/      : Resolver configuration (builder + YAML v1)
 * - errors       : Structured error with machine-readable kinds
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Configuration system
pub mod config;
/// Error types
pub mod errors;
/// Feature modules
pub mod features;
/// Shared models and utilities
pub mod shared;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::ResolverConfig;
pub use errors::{DescriptionError, ErrorKind, Result};
pub use features::class_model::{ClassLoader, ClassPath};
pub use features::description::{
    ComponentDescription, ComponentDescriptionKey, DescriptionCache, DescriptionProcessor,
    DescriptionResolver, FactoryMethodRef, ParameterNameProvider, ParameterRef, ResolverOptions,
};
pub use features::metadata::{LayerDocument, Rule, RuleRegistry};
pub use features::resources::{Bundle, BundleResourceLocator, ResourceLocator};
pub use shared::models::ClassInfo;
