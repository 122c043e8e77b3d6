//! Constructors, methods and their parameters.

use crate::features::description::domain::property::EditorDescription;
use crate::features::description::domain::Tags;
use crate::shared::utils::member_signature;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Where the code generator places a method invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MethodOrder {
    First,
    Last,
    AfterCreation,
    BeforeAssociation,
    AfterAssociation,
    AfterChildren,
    AfterParentChildren,
}

impl MethodOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodOrder::First => "first",
            MethodOrder::Last => "last",
            MethodOrder::AfterCreation => "afterCreation",
            MethodOrder::BeforeAssociation => "beforeAssociation",
            MethodOrder::AfterAssociation => "afterAssociation",
            MethodOrder::AfterChildren => "afterChildren",
            MethodOrder::AfterParentChildren => "afterParentChildren",
        }
    }
}

impl FromStr for MethodOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(MethodOrder::First),
            "last" => Ok(MethodOrder::Last),
            "afterCreation" => Ok(MethodOrder::AfterCreation),
            "beforeAssociation" => Ok(MethodOrder::BeforeAssociation),
            "afterAssociation" => Ok(MethodOrder::AfterAssociation),
            "afterChildren" => Ok(MethodOrder::AfterChildren),
            "afterParentChildren" => Ok(MethodOrder::AfterParentChildren),
            other => Err(format!("unknown method order '{}'", other)),
        }
    }
}

impl fmt::Display for MethodOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParameterDescription {
    pub index: usize,
    pub type_name: String,
    pub name: Option<String>,
    pub default_source: Option<String>,
    /// Parameter receives the parent container
    pub parent: bool,
    /// Parameter receives a child component
    pub child: bool,
    pub parent2: bool,
    pub child2: bool,
    /// Property title this parameter is bound to
    pub property: Option<String>,
    pub editor: Option<EditorDescription>,
    pub tags: Tags,
}

impl ParameterDescription {
    pub fn new(index: usize, type_name: impl Into<String>) -> Self {
        Self {
            index,
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    /// Overlays metadata declared for this parameter.
    pub fn enrich(&mut self, declared: &ParameterDescription) {
        if declared.name.is_some() {
            self.name = declared.name.clone();
        }
        if declared.default_source.is_some() {
            self.default_source = declared.default_source.clone();
        }
        if declared.property.is_some() {
            self.property = declared.property.clone();
        }
        if declared.editor.is_some() {
            self.editor = declared.editor.clone();
        }
        self.parent |= declared.parent;
        self.child |= declared.child;
        self.parent2 |= declared.parent2;
        self.child2 |= declared.child2;
        self.tags
            .extend(declared.tags.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

/// Shared surface of constructors and methods.
pub trait InvocationDescription {
    fn declaring_class(&self) -> &str;
    fn signature(&self) -> String;
    fn parameters(&self) -> &[ParameterDescription];
    fn parameters_mut(&mut self) -> &mut [ParameterDescription];
    fn is_initialized(&self) -> bool;
    fn set_initialized(&mut self, initialized: bool);

    fn parameter_types(&self) -> Vec<String> {
        self.parameters().iter().map(|p| p.type_name.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstructorDescription {
    pub declaring_class: String,
    pub parameters: Vec<ParameterDescription>,
    #[serde(skip)]
    pub initialized: bool,
}

impl ConstructorDescription {
    pub fn new(declaring_class: impl Into<String>, parameter_types: &[String]) -> Self {
        Self {
            declaring_class: declaring_class.into(),
            parameters: parameter_types
                .iter()
                .enumerate()
                .map(|(index, type_name)| ParameterDescription::new(index, type_name.clone()))
                .collect(),
            initialized: false,
        }
    }
}

impl InvocationDescription for ConstructorDescription {
    fn declaring_class(&self) -> &str {
        &self.declaring_class
    }

    fn signature(&self) -> String {
        member_signature("<init>", &self.parameter_types())
    }

    fn parameters(&self) -> &[ParameterDescription] {
        &self.parameters
    }

    fn parameters_mut(&mut self) -> &mut [ParameterDescription] {
        &mut self.parameters
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn set_initialized(&mut self, initialized: bool) {
        self.initialized = initialized;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDescription {
    pub declaring_class: String,
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<ParameterDescription>,
    pub order: Option<MethodOrder>,
    pub tags: Tags,
    #[serde(skip)]
    pub initialized: bool,
}

impl MethodDescription {
    pub fn new(
        declaring_class: impl Into<String>,
        name: impl Into<String>,
        parameter_types: &[String],
        return_type: impl Into<String>,
    ) -> Self {
        Self {
            declaring_class: declaring_class.into(),
            name: name.into(),
            return_type: return_type.into(),
            parameters: parameter_types
                .iter()
                .enumerate()
                .map(|(index, type_name)| ParameterDescription::new(index, type_name.clone()))
                .collect(),
            order: None,
            tags: Tags::new(),
            initialized: false,
        }
    }

    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }
}

impl InvocationDescription for MethodDescription {
    fn declaring_class(&self) -> &str {
        &self.declaring_class
    }

    fn signature(&self) -> String {
        member_signature(&self.name, &self.parameter_types())
    }

    fn parameters(&self) -> &[ParameterDescription] {
        &self.parameters
    }

    fn parameters_mut(&mut self) -> &mut [ParameterDescription] {
        &mut self.parameters
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn set_initialized(&mut self, initialized: bool) {
        self.initialized = initialized;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_order_parse() {
        assert_eq!("afterCreation".parse::<MethodOrder>(), Ok(MethodOrder::AfterCreation));
        assert!("sometime".parse::<MethodOrder>().is_err());
    }

    #[test]
    fn test_signatures() {
        let types = vec!["a.Composite".to_string(), "int".to_string()];
        let constructor = ConstructorDescription::new("a.Button", &types);
        assert_eq!(constructor.signature(), "<init>(a.Composite,int)");
        assert_eq!(constructor.parameters[1].index, 1);

        let method = MethodDescription::new("a.Button", "setBounds", &types, "void");
        assert_eq!(method.signature(), "setBounds(a.Composite,int)");
    }

    #[test]
    fn test_parameter_enrich() {
        let mut parameter = ParameterDescription::new(0, "a.Composite");
        let mut declared = ParameterDescription::new(0, "a.Composite");
        declared.parent = true;
        declared.name = Some("parent".to_string());
        declared.tags.insert("kind".to_string(), "container".to_string());
        parameter.enrich(&declared);

        assert!(parameter.parent);
        assert!(!parameter.child);
        assert_eq!(parameter.name.as_deref(), Some("parent"));
        assert_eq!(parameter.tags.get("kind").map(String::as_str), Some("container"));
    }
}
