//! Class model access: loading, hierarchy walks, bean introspection.

pub mod class_path;
pub mod hierarchy;
pub mod introspection;
pub mod ports;

pub use class_path::ClassPath;
pub use hierarchy::{normalize_component_class, shortest_constructor, super_hierarchy};
pub use introspection::{all_methods, bean_properties, public_fields, BeanProperty};
pub use ports::ClassLoader;
