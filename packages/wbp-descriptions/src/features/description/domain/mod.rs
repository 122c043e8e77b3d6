//! Description domain models

pub mod component;
pub mod creation;
pub mod invocation;
pub mod key;
pub mod morphing;
pub mod property;

use std::collections::BTreeMap;

/// Free-form `name -> value` metadata tags
pub type Tags = BTreeMap<String, String>;

pub use component::ComponentDescription;
pub use creation::{CreationDescription, CreationInvocation, CreationTypeParameter};
pub use invocation::{
    ConstructorDescription, InvocationDescription, MethodDescription, MethodOrder,
    ParameterDescription,
};
pub use key::ComponentDescriptionKey;
pub use morphing::{ExposingRule, MorphingTargetDescription};
pub use property::{
    EditorDescription, EditorParameters, PropertyCategory, PropertyConfiguration,
    PropertyDescription, PropertyKind,
};
