//! Component descriptions
//!
//! # Architecture (Hexagonal)
//!
//! ```text
//! Callers (CLI, designers)
//!           ↓
//! application/ (DescriptionResolver, merge, default creation) ← Entry Point
//!           ↓
//! domain/ (ComponentDescription, keys, creations, properties)
//!           ↓
//! ports/ (DescriptionProcessor, ParameterNameProvider)
//!           ↑
//! infrastructure/ (DescriptionCache)
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-export application layer (primary interface)
pub use application::{
    DescriptionResolver, DescriptionResolverBuilder, FactoryMethodRef, ParameterRef,
    ResolverOptions,
};

pub use domain::{
    ComponentDescription, ComponentDescriptionKey, ConstructorDescription, CreationDescription,
    ExposingRule, InvocationDescription, MethodDescription, MethodOrder,
    MorphingTargetDescription, ParameterDescription, PropertyCategory, PropertyDescription,
    PropertyKind,
};
pub use infrastructure::{CacheStats, DescriptionCache};
pub use ports::{DescriptionProcessor, ParameterNameProvider};
