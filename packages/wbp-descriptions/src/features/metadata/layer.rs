//! Typed content of one `*.wbp-component.xml` layer.
//!
//! A layer only records what its document says; folding it into a
//! description (and checking it against the class model) happens later.

use crate::features::description::domain::{
    CreationDescription, ExposingRule, MethodOrder, MorphingTargetDescription,
    ParameterDescription, PropertyCategory, PropertyConfiguration, PropertyDescription, Tags,
};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MorphTargets {
    /// Drop targets inherited from superclass layers
    pub no_inherit: bool,
    pub targets: Vec<MorphingTargetDescription>,
}

/// `<property-tag names="a b" name="tag" value="v"/>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyTagDeclaration {
    pub properties: Vec<String>,
    pub name: String,
    pub value: String,
}

/// `<method-single-property>` / `<method-property>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodPropertyDeclaration {
    pub title: String,
    pub method: String,
    pub single: bool,
    pub configuration: Option<PropertyConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstructorDeclaration {
    pub parameters: Vec<ParameterDescription>,
}

impl ConstructorDeclaration {
    pub fn parameter_types(&self) -> Vec<String> {
        self.parameters.iter().map(|p| p.type_name.clone()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodDeclaration {
    pub name: String,
    pub order: Option<MethodOrder>,
    pub parameters: Vec<ParameterDescription>,
    pub tags: Tags,
}

impl MethodDeclaration {
    pub fn parameter_types(&self) -> Vec<String> {
        self.parameters.iter().map(|p| p.type_name.clone()).collect()
    }
}

/// `<methods-include signature="set*(int)"/>` or `<methods-exclude .../>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodOperation {
    pub include: bool,
    pub signature: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodOrderDeclaration {
    pub default: Option<MethodOrder>,
    /// `(signature, order)` in document order
    pub methods: Vec<(String, MethodOrder)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerDocument {
    pub toolkit: Option<String>,
    pub model_class: Option<String>,
    pub order: Option<String>,
    pub description: Option<String>,
    pub creations: Vec<CreationDescription>,
    pub creation_default: Option<CreationDescription>,
    pub morph_targets: Option<MorphTargets>,
    pub exposing_rules: Vec<ExposingRule>,
    pub standard_bean_properties: bool,
    pub public_field_properties: bool,
    /// `properties-<category> names="..."` in document order
    pub categories: Vec<(PropertyCategory, Vec<String>)>,
    pub no_default_value: Vec<String>,
    pub property_tags: Vec<PropertyTagDeclaration>,
    pub method_properties: Vec<MethodPropertyDeclaration>,
    pub constructors: Vec<ConstructorDeclaration>,
    pub methods: Vec<MethodDeclaration>,
    pub method_operations: Vec<MethodOperation>,
    pub method_order: MethodOrderDeclaration,
    pub parameters: BTreeMap<String, String>,
    pub properties: Vec<PropertyConfiguration>,
    pub configurable_properties: Vec<PropertyDescription>,
}
