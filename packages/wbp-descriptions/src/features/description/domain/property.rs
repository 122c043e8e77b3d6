//! Property descriptions and the XML-side configuration applied to them.

use crate::features::description::domain::Tags;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyCategory {
    Preferred,
    #[default]
    Normal,
    Advanced,
    AdvancedReally,
    Hidden,
}

impl PropertyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyCategory::Preferred => "preferred",
            PropertyCategory::Normal => "normal",
            PropertyCategory::Advanced => "advanced",
            PropertyCategory::AdvancedReally => "advanced-really",
            PropertyCategory::Hidden => "hidden",
        }
    }
}

impl FromStr for PropertyCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preferred" => Ok(PropertyCategory::Preferred),
            "normal" => Ok(PropertyCategory::Normal),
            "advanced" => Ok(PropertyCategory::Advanced),
            "advanced-really" => Ok(PropertyCategory::AdvancedReally),
            "hidden" => Ok(PropertyCategory::Hidden),
            other => Err(format!("unknown property category '{}'", other)),
        }
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a property comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    /// `setX(T)` found by bean introspection
    BeanSetter,
    /// Public field
    Field,
    /// Single-argument method declared in metadata
    SingleMethod,
    /// Multi-argument method declared in metadata
    Method,
    /// `add-property` with its own editor parameters
    Configurable,
}

/// Named editor parameters; `parameter-list` entries accumulate per name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditorParameters {
    pub values: BTreeMap<String, String>,
    pub lists: BTreeMap<String, Vec<String>>,
}

impl EditorParameters {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.lists.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorDescription {
    pub id: String,
    pub parameters: EditorParameters,
}

impl EditorDescription {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parameters: EditorParameters::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescription {
    /// `setText(java.lang.String)` for methods, field name for fields
    pub id: String,
    pub title: String,
    pub kind: PropertyKind,
    pub type_name: Option<String>,
    pub category: PropertyCategory,
    pub editor: Option<EditorDescription>,
    /// Default value expression
    pub default_value: Option<String>,
    pub getter: Option<String>,
    pub no_default_value: bool,
    pub tags: Tags,
    /// Editor parameters of configurable properties
    #[serde(skip_serializing_if = "EditorParameters::is_empty")]
    pub parameters: EditorParameters,
}

impl PropertyDescription {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            type_name: None,
            category: PropertyCategory::default(),
            editor: None,
            default_value: None,
            getter: None,
            no_default_value: false,
            tags: Tags::new(),
            parameters: EditorParameters::default(),
        }
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Metadata addresses properties by id, or by title as a fallback.
    pub fn matches(&self, selector: &str) -> bool {
        self.id == selector || self.title == selector
    }

    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }
}

/// `<property id="...">` overrides; unset fields leave the property alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyConfiguration {
    pub selector: String,
    pub category: Option<PropertyCategory>,
    pub editor: Option<EditorDescription>,
    pub default_value: Option<String>,
    pub getter: Option<String>,
    pub no_default_value: bool,
    pub tags: Tags,
}

impl PropertyConfiguration {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            ..Self::default()
        }
    }

    pub fn apply_to(&self, property: &mut PropertyDescription) {
        if let Some(category) = self.category {
            property.category = category;
        }
        if let Some(editor) = &self.editor {
            property.editor = Some(editor.clone());
        }
        if let Some(default_value) = &self.default_value {
            property.default_value = Some(default_value.clone());
        }
        if let Some(getter) = &self.getter {
            property.getter = Some(getter.clone());
        }
        property.no_default_value |= self.no_default_value;
        property
            .tags
            .extend(self.tags.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(
            "advanced-really".parse::<PropertyCategory>(),
            Ok(PropertyCategory::AdvancedReally)
        );
        assert!("sometimes".parse::<PropertyCategory>().is_err());
        assert_eq!(PropertyCategory::Preferred.to_string(), "preferred");
    }

    #[test]
    fn test_configuration_apply() {
        let mut property = PropertyDescription::new("setText(java.lang.String)", "text", PropertyKind::BeanSetter);
        property.getter = Some("getText".to_string());

        let mut config = PropertyConfiguration::new("text");
        config.category = Some(PropertyCategory::Preferred);
        config.default_value = Some("\"\"".to_string());
        config.tags.insert("isText".to_string(), "true".to_string());
        config.apply_to(&mut property);

        assert_eq!(property.category, PropertyCategory::Preferred);
        assert_eq!(property.default_value.as_deref(), Some("\"\""));
        assert_eq!(property.getter.as_deref(), Some("getText"));
        assert_eq!(property.tag("isText"), Some("true"));
        assert!(property.matches("text"));
        assert!(property.matches("setText(java.lang.String)"));
    }
}
