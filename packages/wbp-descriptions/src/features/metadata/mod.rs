//! Metadata parsing: `*.wbp-component.xml` → [`LayerDocument`].

pub mod layer;
pub mod loader;
pub mod rules;
pub mod standard_rules;

pub use layer::{
    ConstructorDeclaration, LayerDocument, MethodDeclaration, MethodOperation,
    MethodOrderDeclaration, MethodPropertyDeclaration, MorphTargets, PropertyTagDeclaration,
};
pub use loader::{parse_layer, XmlSyntaxError};
pub use rules::{FnRule, Frame, ParseContext, Rule, RuleRegistry};
