//! Common test utilities for wbp-descriptions
//!
//! Fixtures build small class models and in-memory bundles; the builder
//! wires them into a resolver.

#![allow(dead_code)]

mod builders;
mod fixtures;

pub use builders::*;
pub use fixtures::*;
