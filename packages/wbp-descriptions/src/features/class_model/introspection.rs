//! JavaBeans-style introspection over a class hierarchy.

use crate::shared::models::{ClassInfo, FieldInfo, MethodInfo, Visibility};
use crate::shared::utils::decapitalize;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// Property discovered from a public `setX(T)` method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanProperty {
    pub name: String,
    pub type_name: String,
    pub setter: String,
    pub getter: Option<String>,
}

/// Public instance methods of `hierarchy` (class first), subclass overrides win.
pub fn all_methods(hierarchy: &[Arc<ClassInfo>]) -> Vec<MethodInfo> {
    let mut seen = HashSet::new();
    let mut methods = Vec::new();
    for class in hierarchy {
        for method in &class.methods {
            if method.is_public_instance() && seen.insert(method.signature()) {
                methods.push(method.clone());
            }
        }
    }
    methods
}

/// Bean properties sorted by name, as a bean-info introspector reports them.
pub fn bean_properties(hierarchy: &[Arc<ClassInfo>]) -> Vec<BeanProperty> {
    let methods = all_methods(hierarchy);
    let mut properties = BTreeMap::new();

    for setter in &methods {
        let Some(suffix) = setter.name.strip_prefix("set") else {
            continue;
        };
        if suffix.is_empty() || setter.parameter_types.len() != 1 || setter.return_type != "void" {
            continue;
        }
        let type_name = &setter.parameter_types[0];
        let name = decapitalize(suffix);
        if properties.contains_key(&name) {
            continue;
        }

        let getter = methods
            .iter()
            .find(|m| {
                m.parameter_types.is_empty()
                    && &m.return_type == type_name
                    && (m.name == format!("get{}", suffix)
                        || (type_name == "boolean" && m.name == format!("is{}", suffix)))
            })
            .map(|m| m.name.clone());

        properties.insert(
            name.clone(),
            BeanProperty {
                name,
                type_name: type_name.clone(),
                setter: setter.signature(),
                getter,
            },
        );
    }

    properties.into_values().collect()
}

/// Public, non-static, non-final fields, subclass fields first.
pub fn public_fields(hierarchy: &[Arc<ClassInfo>]) -> Vec<FieldInfo> {
    let mut seen = HashSet::new();
    hierarchy
        .iter()
        .flat_map(|class| class.fields.iter())
        .filter(|f| f.visibility == Visibility::Public && !f.is_static && !f.is_final)
        .filter(|f| seen.insert(f.name.clone()))
        .cloned()
        .collect()
}
