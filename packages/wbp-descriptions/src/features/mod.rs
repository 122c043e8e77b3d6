//! Feature modules, bottom-up:
//!
//! - `class_model`  : loading classes, hierarchy walks, bean introspection
//! - `resources`    : bundles, metadata files, icons, cache markers
//! - `metadata`     : rule-driven parsing of `*.wbp-component.xml`
//! - `description`  : merge, resolution and caching of component descriptions

pub mod class_model;
pub mod description;
pub mod metadata;
pub mod resources;
