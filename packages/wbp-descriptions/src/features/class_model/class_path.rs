//! In-memory class path
//!
//! Holds the class model of a project. Classes are registered directly or
//! read from JSON files containing an array of [`ClassInfo`].

use crate::errors::{DescriptionError, Result};
use crate::features::class_model::ports::ClassLoader;
use crate::shared::models::{ClassInfo, OBJECT_CLASS};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ClassPath {
    classes: HashMap<String, Arc<ClassInfo>>,
}

impl ClassPath {
    /// Class path containing only `java.lang.Object`.
    pub fn new() -> Self {
        let mut classes = HashMap::new();
        classes.insert(
            OBJECT_CLASS.to_string(),
            Arc::new(ClassInfo::new(OBJECT_CLASS).with_constructor(&[])),
        );
        Self { classes }
    }

    pub fn with_class(mut self, class: ClassInfo) -> Self {
        self.add(class);
        self
    }

    /// Registers a class, replacing a previous one with the same name.
    pub fn add(&mut self, class: ClassInfo) {
        self.classes.insert(class.name.clone(), Arc::new(class));
    }

    pub fn add_json(&mut self, json: &str) -> Result<usize> {
        let classes: Vec<ClassInfo> = serde_json::from_str(json)?;
        let count = classes.len();
        for class in classes {
            self.add(class);
        }
        Ok(count)
    }

    pub fn add_json_file(&mut self, path: &Path) -> Result<usize> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            DescriptionError::from(e).with_resource(path.display().to_string())
        })?;
        let count = self
            .add_json(&json)
            .map_err(|e| e.with_resource(path.display().to_string()))?;
        tracing::debug!("Loaded {} classes from {}", count, path.display());
        Ok(count)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for ClassPath {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassLoader for ClassPath {
    fn load_class(&self, name: &str) -> Result<Arc<ClassInfo>> {
        self.classes
            .get(name)
            .cloned()
            .ok_or_else(|| DescriptionError::class_not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_object_always_present() {
        let class_path = ClassPath::new();
        let object = class_path.load_class(OBJECT_CLASS).unwrap();
        assert_eq!(object.superclass, None);
        assert_eq!(object.constructors.len(), 1);
    }

    #[test]
    fn test_missing_class() {
        let err = ClassPath::new().load_class("a.Missing").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ClassNotFound);
        assert_eq!(err.class_name.as_deref(), Some("a.Missing"));
    }

    #[test]
    fn test_add_json() {
        let mut class_path = ClassPath::new();
        let count = class_path
            .add_json(
                r#"[
                    {"name": "a.Widget", "superclass": "java.lang.Object"},
                    {"name": "a.Button", "superclass": "a.Widget",
                     "constructors": [{"parameter_types": ["a.Composite", "int"]}]}
                ]"#,
            )
            .unwrap();

        assert_eq!(count, 2);
        let button = class_path.load_class("a.Button").unwrap();
        assert_eq!(button.superclass.as_deref(), Some("a.Widget"));
        assert_eq!(button.constructors[0].parameter_types.len(), 2);
    }

    #[test]
    fn test_add_json_malformed() {
        let err = ClassPath::new().add_json("[{").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Config);
    }
}
