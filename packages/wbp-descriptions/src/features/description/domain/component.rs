//! The composed description of one component type in one context.

use crate::features::description::domain::creation::CreationDescription;
use crate::features::description::domain::invocation::{
    ConstructorDescription, InvocationDescription, MethodDescription, MethodOrder,
};
use crate::features::description::domain::key::ComponentDescriptionKey;
use crate::features::description::domain::morphing::{ExposingRule, MorphingTargetDescription};
use crate::features::description::domain::property::{PropertyConfiguration, PropertyDescription};
use crate::features::resources::{IconDescriptor, ToolkitDescription};
use crate::shared::models::ClassInfo;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

/// Resolved component metadata
///
/// Built layer by layer by the resolver and shared as
/// `Arc<ComponentDescription>` once complete.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentDescription {
    pub key: ComponentDescriptionKey,
    pub component_class: String,
    #[serde(skip)]
    pub class_info: Arc<ClassInfo>,
    /// Class whose layer is being applied
    #[serde(skip)]
    pub current_class: Option<String>,
    pub toolkit: Option<ToolkitDescription>,
    pub model_class: Option<String>,
    pub order: Option<String>,
    pub icon: Option<IconDescriptor>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub short_description: Option<String>,
    pub creations: Vec<CreationDescription>,
    pub creation_default: Option<CreationDescription>,
    pub morphing_targets: Vec<MorphingTargetDescription>,
    pub exposing_rules: Vec<ExposingRule>,
    pub properties: Vec<PropertyDescription>,
    /// Overrides for properties not known yet when their layer was applied
    #[serde(skip)]
    pub pending_configurations: Vec<PropertyConfiguration>,
    pub constructors: Vec<ConstructorDescription>,
    pub methods: Vec<MethodDescription>,
    pub default_method_order: Option<MethodOrder>,
    pub parameters: BTreeMap<String, String>,
    pub cached: bool,
    pub presentation_cached: bool,
}

impl ComponentDescription {
    pub fn new(key: ComponentDescriptionKey, class_info: Arc<ClassInfo>) -> Self {
        Self {
            component_class: class_info.name.clone(),
            display_name: class_info.display_name.clone(),
            short_description: class_info.short_description.clone(),
            key,
            class_info,
            current_class: None,
            toolkit: None,
            model_class: None,
            order: None,
            icon: None,
            description: None,
            creations: Vec::new(),
            creation_default: None,
            morphing_targets: Vec::new(),
            exposing_rules: Vec::new(),
            properties: Vec::new(),
            pending_configurations: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            default_method_order: None,
            parameters: BTreeMap::new(),
            cached: false,
            presentation_cached: false,
        }
    }

    /// Creation with the given id; `None` asks for the default creation.
    pub fn creation(&self, id: Option<&str>) -> Option<&CreationDescription> {
        match id {
            Some(id) => self
                .creations
                .iter()
                .find(|c| c.id.as_deref() == Some(id)),
            None => self.creation_default.as_ref(),
        }
    }

    pub fn add_creation(&mut self, creation: CreationDescription) {
        self.creations.push(creation);
    }

    /// Drops creations inherited from a superclass layer.
    pub fn clear_creations(&mut self) {
        self.creations.clear();
        self.creation_default = None;
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    /// Adds a property, replacing one with the same id.
    ///
    /// Pending overrides that address the property are applied to it first,
    /// in the order their layers queued them.
    pub fn add_property(&mut self, mut property: PropertyDescription) {
        let (matching, pending): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending_configurations)
                .into_iter()
                .partition(|configuration| property.matches(&configuration.selector));
        self.pending_configurations = pending;
        for configuration in &matching {
            configuration.apply_to(&mut property);
        }
        match self.properties.iter_mut().find(|p| p.id == property.id) {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
    }

    /// Property by id, falling back to title.
    pub fn property(&self, selector: &str) -> Option<&PropertyDescription> {
        self.properties
            .iter()
            .find(|p| p.id == selector)
            .or_else(|| self.properties.iter().find(|p| p.title == selector))
    }

    pub fn property_mut(&mut self, selector: &str) -> Option<&mut PropertyDescription> {
        let index = self
            .properties
            .iter()
            .position(|p| p.id == selector)
            .or_else(|| self.properties.iter().position(|p| p.title == selector))?;
        self.properties.get_mut(index)
    }

    /// Applies `configuration` now, or keeps it for [`join_properties`](Self::join_properties).
    pub fn configure_property(&mut self, configuration: PropertyConfiguration) {
        match self.property_mut(&configuration.selector) {
            Some(property) => configuration.apply_to(property),
            None => self.pending_configurations.push(configuration),
        }
    }

    pub fn constructor(&self, signature: &str) -> Option<&ConstructorDescription> {
        self.constructors.iter().find(|c| c.signature() == signature)
    }

    pub fn constructor_mut(&mut self, signature: &str) -> Option<&mut ConstructorDescription> {
        self.constructors
            .iter_mut()
            .find(|c| c.signature() == signature)
    }

    pub fn method(&self, signature: &str) -> Option<&MethodDescription> {
        self.methods.iter().find(|m| m.signature() == signature)
    }

    pub fn method_mut(&mut self, signature: &str) -> Option<&mut MethodDescription> {
        self.methods.iter_mut().find(|m| m.signature() == signature)
    }

    /// Effective order of a method: its own, else the component default.
    pub fn method_order(&self, signature: &str) -> Option<MethodOrder> {
        self.method(signature)
            .and_then(|m| m.order)
            .or(self.default_method_order)
    }

    /// Whether children returned by `method` of a class in `package` are exposed.
    ///
    /// The last matching rule wins; `None` when no rule matches.
    pub fn is_exposed(&self, package: &str, method: &str) -> Option<bool> {
        self.exposing_rules
            .iter()
            .rev()
            .find_map(|rule| rule.filter(package, method))
    }

    /// Drops overrides that never found their property, with a warning.
    ///
    /// Anything still pending that matches a property is applied first.
    pub fn join_properties(&mut self) {
        let pending = std::mem::take(&mut self.pending_configurations);
        for configuration in pending {
            match self.property_mut(&configuration.selector) {
                Some(property) => configuration.apply_to(property),
                None => warn!(
                    component = %self.component_class,
                    property = %configuration.selector,
                    "override for unknown property ignored"
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::description::domain::property::{PropertyCategory, PropertyKind};

    fn description() -> ComponentDescription {
        let class = Arc::new(ClassInfo::new("a.Button").with_constructor(&[]));
        ComponentDescription::new(ComponentDescriptionKey::new("a.Button"), class)
    }

    #[test]
    fn test_creation_lookup() {
        let mut description = description();
        description.add_creation(CreationDescription::new(Some("flat".to_string()), None));
        description.creation_default = Some(CreationDescription::new(None, None).with_source("new a.Button()"));

        assert!(description.creation(Some("flat")).is_some());
        assert!(description.creation(Some("round")).is_none());
        assert_eq!(
            description.creation(None).and_then(|c| c.source.as_deref()),
            Some("new a.Button()")
        );

        description.clear_creations();
        assert!(description.creations.is_empty());
        assert!(description.creation(None).is_none());
    }

    #[test]
    fn test_pending_configuration_applied_on_add() {
        let mut description = description();
        let mut hidden = PropertyConfiguration::new("text");
        hidden.category = Some(PropertyCategory::Hidden);
        description.configure_property(hidden);
        assert_eq!(description.pending_configurations.len(), 1);

        description.add_property(PropertyDescription::new(
            "setText(java.lang.String)",
            "text",
            PropertyKind::BeanSetter,
        ));
        assert!(description.pending_configurations.is_empty());
        assert_eq!(
            description.property("text").map(|p| p.category),
            Some(PropertyCategory::Hidden)
        );

        // a later layer's override lands on top
        let mut preferred = PropertyConfiguration::new("text");
        preferred.category = Some(PropertyCategory::Preferred);
        description.configure_property(preferred);
        description.join_properties();
        assert_eq!(
            description.property("text").map(|p| p.category),
            Some(PropertyCategory::Preferred)
        );
    }

    #[test]
    fn test_unmatched_configuration_dropped_on_join() {
        let mut description = description();
        description.configure_property(PropertyConfiguration::new("missing"));
        description.add_property(PropertyDescription::new(
            "setText(java.lang.String)",
            "text",
            PropertyKind::BeanSetter,
        ));
        assert_eq!(description.pending_configurations.len(), 1);

        description.join_properties();
        assert!(description.pending_configurations.is_empty());
    }

    #[test]
    fn test_exposing_last_rule_wins() {
        let mut description = description();
        description.exposing_rules.push(ExposingRule {
            include: false,
            package: None,
            method: Some("get*".to_string()),
        });
        description.exposing_rules.push(ExposingRule {
            include: true,
            package: None,
            method: Some("getShell".to_string()),
        });

        assert_eq!(description.is_exposed("a", "getShell"), Some(true));
        assert_eq!(description.is_exposed("a", "getParent"), Some(false));
        assert_eq!(description.is_exposed("a", "parent"), None);
    }
}
