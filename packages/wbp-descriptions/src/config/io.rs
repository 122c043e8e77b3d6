//! Configuration I/O (YAML schema)
//!
//! Defines YAML schema types. Loading and validation live in
//! resolver_config.rs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    /// Metadata bundles, searched in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bundles: Vec<BundleConfig>,

    /// Project class-path roots (resources without a bundle)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub project_roots: Vec<PathBuf>,

    /// JSON class-model files
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class_models: Vec<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheConfig>,

    /// Reject metadata that names constructors/methods missing from the class model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_members: Option<bool>,
}

/// One metadata bundle on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleConfig {
    pub id: String,
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolkit: Option<String>,
}

/// Description cache settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Keep pure descriptions in the session cache
    pub enabled: bool,

    /// Only mark descriptions as cached when their package has the marker file
    pub honor_package_markers: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            honor_package_markers: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::error::ConfigError;
    use crate::config::ResolverConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_roundtrip() {
        let config = ResolverConfig::default()
            .bundle("swt", "/opt/meta/swt", Some("org.eclipse.swt"))
            .strict_members(true);

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("id: swt"));
        assert!(yaml.contains("toolkit: org.eclipse.swt"));
        assert!(yaml.contains("strict_members: true"));
    }

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r#"
version: 1
bundles:
  - id: swt
    path: /opt/meta/swt
    toolkit: org.eclipse.swt
project_roots:
  - /work/project/src
cache:
  enabled: true
  honor_package_markers: false
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = ResolverConfig::from_yaml(temp_file.path()).unwrap();
        assert_eq!(config.bundles.len(), 1);
        assert_eq!(config.bundles[0].toolkit.as_deref(), Some("org.eclipse.swt"));
        assert_eq!(config.project_roots.len(), 1);
        assert!(!config.cache.honor_package_markers);
        assert!(!config.strict_members);
    }

    #[test]
    fn test_yaml_missing_version() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"bundles: []\n").unwrap();

        let result = ResolverConfig::from_yaml(temp_file.path());
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unknown_field() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"version: 1\nbundels: []\n")
            .unwrap();

        let result = ResolverConfig::from_yaml(temp_file.path());
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }
}
