//! Reading one metadata resource into a [`LayerDocument`].

use crate::errors::{DescriptionError, Result};
use crate::features::metadata::layer::LayerDocument;
use crate::features::metadata::rules::RuleRegistry;
use crate::features::resources::ResourceInfo;
use thiserror::Error;
use tracing::debug;
use xmltree::Element;

/// Malformed XML, detached from the parser's own error type
#[derive(Debug, Error)]
#[error("malformed XML: {0}")]
pub struct XmlSyntaxError(pub String);

/// Parses `resource` and runs the rules over it.
///
/// Any failure is a `LoadError` naming the resource.
pub fn parse_layer(registry: &RuleRegistry, resource: &ResourceInfo) -> Result<LayerDocument> {
    let location = resource.describe();
    let root = {
        let reader = resource.open().map_err(|e| {
            DescriptionError::load(format!("cannot open {}", location))
                .with_resource(location.clone())
                .with_source(e)
        })?;
        Element::parse(reader).map_err(|e| {
            DescriptionError::load(format!("cannot parse {}", location))
                .with_resource(location.clone())
                .with_source(XmlSyntaxError(e.to_string()))
        })?
    };

    let document = registry
        .apply(&root)
        .map_err(|e| e.with_resource(location.clone()))?;
    debug!(resource = %location, "parsed description layer");
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::features::resources::{Bundle, BundleResourceLocator, ResourceLocator};
    use std::error::Error as _;

    fn resource(content: &str) -> ResourceInfo {
        BundleResourceLocator::new()
            .with_bundle(Bundle::memory("core").with_entry("a/Button.wbp-component.xml", content))
            .find_resource("a/Button.wbp-component.xml")
            .unwrap()
    }

    #[test]
    fn test_parse_layer() {
        let document = parse_layer(
            &RuleRegistry::standard(),
            &resource(r#"<component><toolkit id="swt"/></component>"#),
        )
        .unwrap();
        assert_eq!(document.toolkit.as_deref(), Some("swt"));
    }

    #[test]
    fn test_malformed_xml() {
        let err = parse_layer(&RuleRegistry::standard(), &resource("<component><toolkit></component>"))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::LoadError);
        assert_eq!(err.resource.as_deref(), Some("core:a/Button.wbp-component.xml"));
        assert!(err.source().is_some());
    }
}
