//! Path-pattern rule dispatch over a parsed XML tree.
//!
//! Every element gets a slash separated path from the root
//! (`component/constructors/constructor/parameter`). Rules are registered
//! for exact paths or for `*/`-prefixed suffixes (`*/editor/parameter`).
//! For each element, matching rules see `begin` in registration order,
//! then the children are walked, then `end` runs in reverse order.

use crate::errors::{DescriptionError, Result};
use crate::features::description::domain::{
    CreationDescription, EditorDescription, MethodOrder, ParameterDescription,
    PropertyConfiguration, PropertyDescription,
};
use crate::features::metadata::layer::{
    ConstructorDeclaration, LayerDocument, MethodDeclaration, MethodPropertyDeclaration,
    MorphTargets,
};
use std::fmt;
use std::sync::Arc;
use xmltree::{Element, XMLNode};

pub const ROOT_ELEMENT: &str = "component";

/// Handler for one element path
pub trait Rule: Send + Sync {
    fn begin(&self, _ctx: &mut ParseContext, _element: &Element) -> Result<()> {
        Ok(())
    }

    fn end(&self, _ctx: &mut ParseContext, _element: &Element) -> Result<()> {
        Ok(())
    }
}

type RuleFn = dyn Fn(&mut ParseContext, &Element) -> Result<()> + Send + Sync;

/// Rule built from closures
pub struct FnRule {
    begin: Option<Box<RuleFn>>,
    end: Option<Box<RuleFn>>,
}

impl FnRule {
    pub fn on_begin<F>(f: F) -> Self
    where
        F: Fn(&mut ParseContext, &Element) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            begin: Some(Box::new(f)),
            end: None,
        }
    }

    pub fn on_end<F>(f: F) -> Self
    where
        F: Fn(&mut ParseContext, &Element) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            begin: None,
            end: Some(Box::new(f)),
        }
    }

    pub fn and_end<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut ParseContext, &Element) -> Result<()> + Send + Sync + 'static,
    {
        self.end = Some(Box::new(f));
        self
    }
}

impl Rule for FnRule {
    fn begin(&self, ctx: &mut ParseContext, element: &Element) -> Result<()> {
        match &self.begin {
            Some(f) => f(ctx, element),
            None => Ok(()),
        }
    }

    fn end(&self, ctx: &mut ParseContext, element: &Element) -> Result<()> {
        match &self.end {
            Some(f) => f(ctx, element),
            None => Ok(()),
        }
    }
}

/// Object under construction while its element is open
#[derive(Debug, Clone)]
pub enum Frame {
    Creation {
        creation: CreationDescription,
        default: bool,
    },
    MorphTargets(MorphTargets),
    Constructor(ConstructorDeclaration),
    Method(MethodDeclaration),
    Parameter(ParameterDescription),
    Property(PropertyConfiguration),
    MethodProperty(MethodPropertyDeclaration),
    ConfigurableProperty(PropertyDescription),
    Editor(EditorDescription),
    MethodOrderGroup(MethodOrder),
}

impl Frame {
    pub fn name(&self) -> &'static str {
        match self {
            Frame::Creation { .. } => "creation",
            Frame::MorphTargets(_) => "morph targets",
            Frame::Constructor(_) => "constructor",
            Frame::Method(_) => "method",
            Frame::Parameter(_) => "parameter",
            Frame::Property(_) => "property",
            Frame::MethodProperty(_) => "method property",
            Frame::ConfigurableProperty(_) => "configurable property",
            Frame::Editor(_) => "editor",
            Frame::MethodOrderGroup(_) => "method order group",
        }
    }
}

/// Parse state: the layer being filled plus the frame stack
#[derive(Debug, Default)]
pub struct ParseContext {
    pub document: LayerDocument,
    stack: Vec<Frame>,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: Frame) {
        self.stack.push(frame);
    }

    pub fn pop(&mut self, element: &Element) -> Result<Frame> {
        self.stack
            .pop()
            .ok_or_else(|| DescriptionError::load(format!("<{}> closed with empty stack", element.name)))
    }

    pub fn top_mut(&mut self) -> Option<&mut Frame> {
        self.stack.last_mut()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Property configuration open on top of the stack.
    pub fn configuration_mut(&mut self, element: &Element) -> Result<&mut PropertyConfiguration> {
        match self.stack.last_mut() {
            Some(Frame::Property(configuration)) => Ok(configuration),
            Some(Frame::MethodProperty(declaration)) => {
                let selector = declaration.method.clone();
                Ok(declaration
                    .configuration
                    .get_or_insert_with(|| PropertyConfiguration::new(selector)))
            }
            other => Err(misplaced(element, other.map(|f| f.name()))),
        }
    }

    pub fn into_document(self) -> Result<LayerDocument> {
        match self.stack.last() {
            Some(frame) => Err(DescriptionError::load(format!(
                "unterminated {} at end of document",
                frame.name()
            ))),
            None => Ok(self.document),
        }
    }
}

/// Error for an element that found the wrong frame on the stack.
pub fn misplaced(element: &Element, found: Option<&str>) -> DescriptionError {
    DescriptionError::load(format!(
        "<{}> is not allowed here (open: {})",
        element.name,
        found.unwrap_or("nothing")
    ))
}

#[derive(Clone)]
struct Registration {
    pattern: String,
    rule: Arc<dyn Rule>,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl Registration {
    fn matches(&self, path: &str) -> bool {
        match self.pattern.strip_prefix("*/") {
            Some(suffix) => path == suffix || path.ends_with(&format!("/{}", suffix)),
            None => self.pattern == path,
        }
    }
}

/// Ordered pattern → rule table
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    registrations: Vec<Registration>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every rule of the component metadata format.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        crate::features::metadata::standard_rules::register(&mut registry);
        registry
    }

    pub fn add(&mut self, pattern: impl Into<String>, rule: impl Rule + 'static) -> &mut Self {
        self.registrations.push(Registration {
            pattern: pattern.into(),
            rule: Arc::new(rule),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.registrations.iter().map(|r| r.pattern.as_str())
    }

    /// Runs the rules over a parsed document.
    pub fn apply(&self, root: &Element) -> Result<LayerDocument> {
        if root.name != ROOT_ELEMENT {
            return Err(DescriptionError::load(format!(
                "root element must be <{}>, found <{}>",
                ROOT_ELEMENT, root.name
            )));
        }
        let mut ctx = ParseContext::new();
        self.walk(&mut ctx, root, ROOT_ELEMENT)?;
        ctx.into_document()
    }

    fn walk(&self, ctx: &mut ParseContext, element: &Element, path: &str) -> Result<()> {
        let matched: Vec<&Registration> = self
            .registrations
            .iter()
            .filter(|r| r.matches(path))
            .collect();

        for registration in &matched {
            registration.rule.begin(ctx, element)?;
        }
        for child in element.children.iter().filter_map(XMLNode::as_element) {
            let child_path = format!("{}/{}", path, child.name);
            self.walk(ctx, child, &child_path)?;
        }
        for registration in matched.iter().rev() {
            registration.rule.end(ctx, element)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn parse(xml: &str) -> Element {
        Element::parse(xml.as_bytes()).unwrap()
    }

    #[test]
    fn test_wildcard_pattern_matching() {
        let registration = Registration {
            pattern: "*/editor/parameter".to_string(),
            rule: Arc::new(FnRule::on_begin(|_, _| Ok(()))),
        };
        assert!(registration.matches("component/property/editor/parameter"));
        assert!(registration.matches("editor/parameter"));
        assert!(!registration.matches("component/property/xeditor/parameter"));
        assert!(!registration.matches("component/parameters/parameter"));
    }

    #[test]
    fn test_begin_end_order() {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let mut registry = RuleRegistry::new();
        registry.add(
            "component/model",
            FnRule::on_begin(|ctx, element| {
                COUNTER.fetch_add(1, Ordering::SeqCst);
                ctx.document.model_class = element.attributes.get("class").cloned();
                Ok(())
            })
            .and_end(|ctx, _| {
                ctx.document.order = Some("closed".to_string());
                Ok(())
            }),
        );

        let document = registry
            .apply(&parse(r#"<component><model class="a.Model"/><unknown/></component>"#))
            .unwrap();
        assert_eq!(COUNTER.load(Ordering::SeqCst), 1);
        assert_eq!(document.model_class.as_deref(), Some("a.Model"));
        assert_eq!(document.order.as_deref(), Some("closed"));
    }

    #[test]
    fn test_wrong_root_rejected() {
        let err = RuleRegistry::new().apply(&parse("<widget/>")).unwrap_err();
        assert_eq!(err.kind, crate::errors::ErrorKind::LoadError);
    }

    #[test]
    fn test_unbalanced_stack_rejected() {
        let mut registry = RuleRegistry::new();
        registry.add(
            "component/methods/method",
            FnRule::on_begin(|ctx, _| {
                ctx.push(Frame::Method(MethodDeclaration::default()));
                Ok(())
            }),
        );
        let err = registry
            .apply(&parse("<component><methods><method/></methods></component>"))
            .unwrap_err();
        assert!(err.message.contains("unterminated method"));
    }
}
