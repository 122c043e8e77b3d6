use crate::features::description::domain::Tags;
use crate::features::resources::IconDescriptor;
use serde::Serialize;
use std::collections::BTreeMap;

/// Extra invocation applied right after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationInvocation {
    pub signature: String,
    pub arguments: String,
}

/// Generic type parameter a creation asks the user for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationTypeParameter {
    pub name: String,
    pub type_name: String,
    pub title: Option<String>,
}

/// One way to instantiate a component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreationDescription {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Source template, e.g. `new %component.class%(%parent%, SWT.NONE)`
    pub source: Option<String>,
    pub invocations: Vec<CreationInvocation>,
    pub parameters: BTreeMap<String, String>,
    pub tags: Tags,
    pub type_parameters: Vec<CreationTypeParameter>,
    pub icon: Option<IconDescriptor>,
}

impl CreationDescription {
    pub fn new(id: Option<String>, name: Option<String>) -> Self {
        Self {
            id,
            name,
            ..Self::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }
}
