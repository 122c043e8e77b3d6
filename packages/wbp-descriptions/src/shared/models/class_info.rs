//! Class model
//!
//! A serializable stand-in for reflective class data. Names are binary
//! names (`a.b.Outer$Inner`); parameter and field types are source names
//! (`int`, `java.lang.String`, `int[]`).

use crate::shared::utils::{canonical_name, member_signature, package_of, short_name};
use serde::{Deserialize, Serialize};

pub const OBJECT_CLASS: &str = "java.lang.Object";

/// Member visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorInfo {
    #[serde(default)]
    pub parameter_types: Vec<String>,
    #[serde(default)]
    pub visibility: Visibility,
}

impl ConstructorInfo {
    pub fn public(parameter_types: &[&str]) -> Self {
        Self {
            parameter_types: parameter_types.iter().map(|t| t.to_string()).collect(),
            visibility: Visibility::Public,
        }
    }

    /// `<init>(int,java.lang.String)`
    pub fn signature(&self) -> String {
        member_signature("<init>", &self.parameter_types)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    #[serde(default)]
    pub parameter_types: Vec<String>,
    #[serde(default = "void_type")]
    pub return_type: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_static: bool,
}

fn void_type() -> String {
    "void".to_string()
}

impl MethodInfo {
    pub fn public(name: &str, parameter_types: &[&str], return_type: &str) -> Self {
        Self {
            name: name.to_string(),
            parameter_types: parameter_types.iter().map(|t| t.to_string()).collect(),
            return_type: return_type.to_string(),
            visibility: Visibility::Public,
            is_static: false,
        }
    }

    pub fn signature(&self) -> String {
        member_signature(&self.name, &self.parameter_types)
    }

    pub fn is_public_instance(&self) -> bool {
        self.visibility == Visibility::Public && !self.is_static
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    pub type_name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_final: bool,
}

/// One class of the project class path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub is_interface: bool,
    #[serde(default)]
    pub constructors: Vec<ConstructorInfo>,
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
    #[serde(default)]
    pub fields: Vec<FieldInfo>,
    /// Bean descriptor display name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Bean descriptor short description
    #[serde(default)]
    pub short_description: Option<String>,
}

impl ClassInfo {
    /// Class extending `java.lang.Object`, without members.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let superclass = if name == OBJECT_CLASS {
            None
        } else {
            Some(OBJECT_CLASS.to_string())
        };
        Self {
            name,
            superclass,
            interfaces: Vec::new(),
            is_interface: false,
            constructors: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            display_name: None,
            short_description: None,
        }
    }

    pub fn interface(name: impl Into<String>) -> Self {
        let mut class = Self::new(name);
        class.superclass = None;
        class.is_interface = true;
        class
    }

    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_constructor(mut self, parameter_types: &[&str]) -> Self {
        self.constructors.push(ConstructorInfo::public(parameter_types));
        self
    }

    pub fn with_method(mut self, name: &str, parameter_types: &[&str], return_type: &str) -> Self {
        self.methods
            .push(MethodInfo::public(name, parameter_types, return_type));
        self
    }

    pub fn with_field(mut self, name: &str, type_name: &str) -> Self {
        self.fields.push(FieldInfo {
            name: name.to_string(),
            type_name: type_name.to_string(),
            visibility: Visibility::Public,
            is_static: false,
            is_final: false,
        });
        self
    }

    pub fn package_name(&self) -> &str {
        package_of(&self.name)
    }

    pub fn short_name(&self) -> &str {
        short_name(&self.name)
    }

    pub fn canonical_name(&self) -> String {
        canonical_name(&self.name)
    }

    pub fn find_method(&self, signature: &str) -> Option<&MethodInfo> {
        self.methods.iter().find(|m| m.signature() == signature)
    }

    pub fn find_constructor(&self, signature: &str) -> Option<&ConstructorInfo> {
        self.constructors.iter().find(|c| c.signature() == signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signatures() {
        let class = ClassInfo::new("a.Button")
            .with_constructor(&["a.Composite", "int"])
            .with_method("setText", &["java.lang.String"], "void");

        assert_eq!(class.constructors[0].signature(), "<init>(a.Composite,int)");
        assert_eq!(class.methods[0].signature(), "setText(java.lang.String)");
        assert!(class.find_method("setText(java.lang.String)").is_some());
        assert!(class.find_constructor("<init>()").is_none());
    }

    #[test]
    fn test_object_has_no_superclass() {
        assert_eq!(ClassInfo::new(OBJECT_CLASS).superclass, None);
        assert_eq!(
            ClassInfo::new("a.B").superclass.as_deref(),
            Some(OBJECT_CLASS)
        );
        assert_eq!(ClassInfo::interface("a.I").superclass, None);
    }

    #[test]
    fn test_json_defaults() {
        let class: ClassInfo = serde_json::from_str(
            r#"{"name": "a.Label", "methods": [{"name": "getText", "return_type": "java.lang.String"}]}"#,
        )
        .unwrap();

        assert_eq!(class.superclass, None);
        assert_eq!(class.methods[0].visibility, Visibility::Public);
        assert_eq!(class.methods[0].signature(), "getText()");
    }
}
