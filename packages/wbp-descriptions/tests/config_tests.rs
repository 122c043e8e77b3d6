//! Resolver construction from YAML configuration and directory bundles

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use wbp_descriptions::features::resources::DESCRIPTION_SUFFIX;
use wbp_descriptions::{BundleResourceLocator, DescriptionResolver, ErrorKind, ResolverConfig};

const CLASSES: &str = r#"[
  { "name": "a.Widget", "constructors": [ { "parameter_types": [] } ] },
  {
    "name": "a.Button",
    "superclass": "a.Widget",
    "constructors": [ { "parameter_types": ["a.Composite", "int"] } ]
  },
  { "name": "a.Composite", "superclass": "a.Widget" }
]"#;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Workspace with a `core` bundle, a project root and a class model.
fn workspace(cache: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write(
        root,
        "meta/core/a/Widget.wbp-component.xml",
        r#"<component><model class="a.WidgetInfo"/></component>"#,
    );
    write(root, "meta/core/a/.wbp-cache-descriptions", "");
    write(root, "meta/core/a/Widget.png", "png");
    write(
        root,
        "project/a/Button.wbp-component.xml",
        r#"<component><description>Project button</description></component>"#,
    );
    write(root, "classes.json", CLASSES);
    write(
        root,
        "wbp.yaml",
        &format!(
            "version: 1\n\
             bundles:\n  - id: core\n    path: meta/core\n    toolkit: org.example.swt\n\
             project_roots:\n  - project\n\
             class_models:\n  - classes.json\n\
             {cache}"
        ),
    );
    dir
}

#[test]
fn test_resolver_from_yaml() {
    let dir = workspace("");
    let config = ResolverConfig::from_yaml(dir.path().join("wbp.yaml")).unwrap();
    let resolver = DescriptionResolver::from_config(&config).unwrap();

    let button = resolver.describe("a.Button").unwrap();
    assert_eq!(button.toolkit.as_ref().map(|t| t.id.as_str()), Some("org.example.swt"));
    assert_eq!(button.model_class.as_deref(), Some("a.WidgetInfo"));
    assert_eq!(button.description.as_deref(), Some("Project button"));
    assert_eq!(
        button.creation(None).and_then(|c| c.source.as_deref()),
        Some("new a.Button(null, 0)")
    );
    assert_eq!(
        button.icon.as_ref().map(|i| i.path.as_str()),
        Some("a/Widget.png")
    );
    // project resources carry no bundle, hence no package marker
    assert!(!button.cached);

    let widget = resolver.describe("a.Widget").unwrap();
    assert!(widget.cached);
}

#[test]
fn test_package_markers_can_be_ignored() {
    let dir = workspace("cache:\n  enabled: true\n  honor_package_markers: false\n");
    let config = ResolverConfig::from_yaml(dir.path().join("wbp.yaml")).unwrap();
    let resolver = DescriptionResolver::from_config(&config).unwrap();

    let button = resolver.describe("a.Button").unwrap();
    assert!(button.cached);
    resolver.invalidate_session();
    assert!(Arc::ptr_eq(&button, &resolver.describe("a.Button").unwrap()));
}

#[test]
fn test_cache_disabled() {
    let dir = workspace("cache:\n  enabled: false\n  honor_package_markers: true\n");
    let config = ResolverConfig::from_yaml(dir.path().join("wbp.yaml")).unwrap();
    let resolver = DescriptionResolver::from_config(&config).unwrap();

    let first = resolver.describe("a.Widget").unwrap();
    let second = resolver.describe("a.Widget").unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert!(resolver.cache().is_empty());
}

#[test]
fn test_missing_class_model_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = ResolverConfig::default().class_model(dir.path().join("missing.json"));
    let err = DescriptionResolver::from_config(&config).err().unwrap();
    assert_eq!(err.kind, ErrorKind::Io);
    assert!(err.resource.as_deref().unwrap_or_default().ends_with("missing.json"));
}

#[test]
fn test_invalid_config_rejected() {
    let config = ResolverConfig::default()
        .bundle("core", "/a", None)
        .bundle("core", "/b", None);
    let err = DescriptionResolver::from_config(&config).err().unwrap();
    assert_eq!(err.kind, ErrorKind::Config);
}

#[test]
fn test_list_metadata_entries() {
    let dir = workspace("");
    let config = ResolverConfig::from_yaml(dir.path().join("wbp.yaml")).unwrap();
    let locator = BundleResourceLocator::from_config(&config);

    let listed: Vec<Vec<String>> = locator
        .bundles()
        .iter()
        .map(|bundle| bundle.entries_with_suffix(DESCRIPTION_SUFFIX))
        .collect();
    assert_eq!(
        listed,
        vec![
            vec!["a/Widget.wbp-component.xml".to_string()],
            vec!["a/Button.wbp-component.xml".to_string()],
        ]
    );
}
