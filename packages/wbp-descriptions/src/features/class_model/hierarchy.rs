//! Class hierarchy walks over a [`ClassLoader`].

use crate::errors::{DescriptionError, Result};
use crate::features::class_model::ports::ClassLoader;
use crate::shared::models::{ClassInfo, ConstructorInfo, Visibility};
use crate::shared::utils::is_anonymous;
use std::collections::HashSet;
use std::sync::Arc;

/// Returns `class` followed by its superclasses, up to the root.
pub fn super_hierarchy(loader: &dyn ClassLoader, class: &Arc<ClassInfo>) -> Result<Vec<Arc<ClassInfo>>> {
    let mut hierarchy = vec![Arc::clone(class)];
    let mut seen = HashSet::new();
    seen.insert(class.name.clone());

    let mut current = Arc::clone(class);
    while let Some(superclass) = current.superclass.clone() {
        if !seen.insert(superclass.clone()) {
            return Err(DescriptionError::load(format!(
                "cyclic inheritance through {}",
                superclass
            ))
            .with_class(&class.name));
        }
        current = loader.load_class(&superclass)?;
        hierarchy.push(Arc::clone(&current));
    }
    Ok(hierarchy)
}

/// Skips anonymous classes that metadata paths cannot name.
///
/// Stops at the first class that is not nested, is an anonymous
/// implementation of some interface, or is a named nested class.
pub fn normalize_component_class(
    loader: &dyn ClassLoader,
    class: &Arc<ClassInfo>,
) -> Result<Arc<ClassInfo>> {
    let mut current = Arc::clone(class);
    loop {
        if !current.name.contains('$') {
            break;
        }
        if !current.interfaces.is_empty() {
            break;
        }
        if !is_anonymous(&current.name) {
            break;
        }
        match current.superclass.clone() {
            Some(superclass) => current = loader.load_class(&superclass)?,
            None => break,
        }
    }
    Ok(current)
}

/// Public constructor with the fewest parameters, first declared on ties.
pub fn shortest_constructor(class: &ClassInfo) -> Option<&ConstructorInfo> {
    class
        .constructors
        .iter()
        .filter(|c| c.visibility == Visibility::Public)
        .min_by_key(|c| c.parameter_types.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::class_model::ClassPath;
    use crate::shared::models::OBJECT_CLASS;

    fn class_path() -> ClassPath {
        ClassPath::new()
            .with_class(ClassInfo::new("a.Widget"))
            .with_class(ClassInfo::new("a.Button").extends("a.Widget"))
            .with_class(ClassInfo::new("a.Form$1").extends("a.Button"))
            .with_class(ClassInfo::new("a.Form$2").extends("a.Form$1"))
            .with_class(
                ClassInfo::new("a.Form$3")
                    .extends("a.Widget")
                    .implements("a.Listener"),
            )
            .with_class(ClassInfo::new("a.Form$Inner").extends("a.Button"))
    }

    #[test]
    fn test_super_hierarchy() {
        let cp = class_path();
        let button = cp.load_class("a.Button").unwrap();
        let names: Vec<String> = super_hierarchy(&cp, &button)
            .unwrap()
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(names, vec!["a.Button", "a.Widget", OBJECT_CLASS]);
    }

    #[test]
    fn test_super_hierarchy_cycle() {
        let cp = ClassPath::new()
            .with_class(ClassInfo::new("a.A").extends("a.B"))
            .with_class(ClassInfo::new("a.B").extends("a.A"));
        let a = cp.load_class("a.A").unwrap();
        assert!(super_hierarchy(&cp, &a).is_err());
    }

    #[test]
    fn test_normalize_skips_anonymous_chain() {
        let cp = class_path();
        let anonymous = cp.load_class("a.Form$2").unwrap();
        assert_eq!(normalize_component_class(&cp, &anonymous).unwrap().name, "a.Button");
    }

    #[test]
    fn test_normalize_keeps_interface_implementation() {
        let cp = class_path();
        let anonymous = cp.load_class("a.Form$3").unwrap();
        assert_eq!(normalize_component_class(&cp, &anonymous).unwrap().name, "a.Form$3");
    }

    #[test]
    fn test_normalize_keeps_named_inner() {
        let cp = class_path();
        let inner = cp.load_class("a.Form$Inner").unwrap();
        assert_eq!(normalize_component_class(&cp, &inner).unwrap().name, "a.Form$Inner");
    }

    #[test]
    fn test_shortest_constructor() {
        let mut class = ClassInfo::new("a.Spinner")
            .with_constructor(&["a.Composite", "int"])
            .with_constructor(&["a.Composite"]);
        class.constructors.push(ConstructorInfo {
            parameter_types: vec![],
            visibility: Visibility::Private,
        });

        let shortest = shortest_constructor(&class).unwrap();
        assert_eq!(shortest.signature(), "<init>(a.Composite)");
        assert!(shortest_constructor(&ClassInfo::new("a.NoCtor")).is_none());
    }
}
