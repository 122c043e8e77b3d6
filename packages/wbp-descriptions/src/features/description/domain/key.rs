//! Description identity
//!
//! A pure key names a class; a contextual key chains a host key and a
//! suffix (factory signature, exposing method, parameter position). The key
//! alone determines the metadata path:
//!
//! ```text
//! a.b.Button                               -> a/b/Button.wbp-component.xml
//! (a.b.Button, a.Factory, create_int_)     -> a/Factory.create_int_.wbp-component.xml
//! ```

use crate::features::resources::description_path;
use crate::shared::utils::class_resource_path;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentDescriptionKey {
    component_class: String,
    host: Option<Arc<ComponentDescriptionKey>>,
    suffix: Option<String>,
}

impl ComponentDescriptionKey {
    pub fn new(component_class: impl Into<String>) -> Self {
        Self {
            component_class: component_class.into(),
            host: None,
            suffix: None,
        }
    }

    pub fn contextual(
        component_class: impl Into<String>,
        host: &ComponentDescriptionKey,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            component_class: component_class.into(),
            host: Some(Arc::new(host.clone())),
            suffix: Some(suffix.into()),
        }
    }

    pub fn component_class(&self) -> &str {
        &self.component_class
    }

    pub fn host(&self) -> Option<&ComponentDescriptionKey> {
        self.host.as_deref()
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Context-free key, eligible for the shared cache.
    pub fn is_pure(&self) -> bool {
        self.host.is_none()
    }

    pub fn name(&self) -> String {
        match (&self.host, &self.suffix) {
            (Some(host), Some(suffix)) => format!("{}.{}", host.name(), suffix),
            _ => self.component_class.clone(),
        }
    }

    /// Slash separated resource base path, without extension.
    pub fn resource_path(&self) -> String {
        match (&self.host, &self.suffix) {
            (Some(host), Some(suffix)) => format!("{}.{}", host.resource_path(), suffix),
            _ => class_resource_path(&self.component_class),
        }
    }

    pub fn description_path(&self) -> String {
        description_path(&self.resource_path())
    }
}

impl fmt::Display for ComponentDescriptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl Serialize for ComponentDescriptionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}
