//! Default creation synthesis: `new Foo(0, null, false)`.

use crate::features::class_model::shortest_constructor;
use crate::features::description::domain::{ComponentDescription, CreationDescription};
use crate::shared::models::ConstructorInfo;
use crate::shared::utils::canonical_name;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref DEFAULT_VALUES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("boolean", "false");
        m.insert("byte", "(byte) 0");
        m.insert("char", "'0'");
        m.insert("short", "(short) 0");
        m.insert("int", "0");
        m.insert("long", "0L");
        m.insert("float", "0.0f");
        m.insert("double", "0.0");
        m
    };
}

/// Source of the default value of a type; `null` for anything not primitive.
pub fn default_value(type_name: &str) -> &'static str {
    DEFAULT_VALUES.get(type_name).copied().unwrap_or("null")
}

/// `new a.b.Foo(0, null)` for `constructor` of `class_name`.
pub fn default_constructor_invocation(class_name: &str, constructor: &ConstructorInfo) -> String {
    let arguments: Vec<&str> = constructor
        .parameter_types
        .iter()
        .map(|type_name| default_value(type_name))
        .collect();
    format!("new {}({})", canonical_name(class_name), arguments.join(", "))
}

/// Installs a creation from the shortest public constructor.
///
/// Replaces any creation-default supplied by metadata. Classes without a
/// public constructor keep what metadata gave them.
pub fn configure_default_creation(description: &mut ComponentDescription) {
    let Some(constructor) = shortest_constructor(&description.class_info) else {
        return;
    };
    let source = default_constructor_invocation(&description.component_class, constructor);
    description.creation_default = Some(CreationDescription::new(None, None).with_source(source));
}
