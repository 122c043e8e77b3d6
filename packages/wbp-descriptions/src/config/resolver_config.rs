//! Resolver configuration
//!
//! Builder API for programmatic setup, plus YAML v1 loading for the CLI.

use super::error::{ConfigError, ConfigResult};
use super::io::{BundleConfig, CacheConfig, ConfigExportV1};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Complete resolver configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    pub bundles: Vec<BundleConfig>,
    pub project_roots: Vec<PathBuf>,
    pub class_models: Vec<PathBuf>,
    pub cache: CacheConfig,
    pub strict_members: bool,
}

impl ResolverConfig {
    pub fn bundle(
        mut self,
        id: impl Into<String>,
        path: impl Into<PathBuf>,
        toolkit: Option<&str>,
    ) -> Self {
        self.bundles.push(BundleConfig {
            id: id.into(),
            path: path.into(),
            toolkit: toolkit.map(str::to_string),
        });
        self
    }

    pub fn project_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_roots.push(path.into());
        self
    }

    pub fn class_model(mut self, path: impl Into<PathBuf>) -> Self {
        self.class_models.push(path.into());
        self
    }

    pub fn cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    pub fn strict_members(mut self, strict: bool) -> Self {
        self.strict_members = strict;
        self
    }

    /// Load and validate a YAML v1 configuration file.
    ///
    /// Relative paths inside the file are resolved against the file's directory.
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&content)?;
        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        // Version check
        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = Self {
            bundles: export.bundles,
            project_roots: export.project_roots,
            class_models: export.class_models,
            cache: export.cache.unwrap_or_default(),
            strict_members: export.strict_members.unwrap_or(false),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            bundles: self.bundles.clone(),
            project_roots: self.project_roots.clone(),
            class_models: self.class_models.clone(),
            cache: Some(self.cache),
            strict_members: Some(self.strict_members),
        };
        Ok(serde_yaml::to_string(&export)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let mut seen = HashSet::new();
        for (i, bundle) in self.bundles.iter().enumerate() {
            if bundle.id.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("bundles[{}].id", i),
                    "must not be empty",
                ));
            }
            if !seen.insert(bundle.id.as_str()) {
                return Err(ConfigError::invalid(
                    format!("bundles[{}].id", i),
                    format!("duplicate bundle id '{}'", bundle.id),
                ));
            }
            if matches!(bundle.toolkit.as_deref(), Some(t) if t.trim().is_empty()) {
                return Err(ConfigError::invalid(
                    format!("bundles[{}].toolkit", i),
                    "must not be blank",
                ));
            }
        }
        Ok(())
    }

    fn rebase(&mut self, base: &Path) {
        let rebase = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        self.bundles.iter_mut().for_each(|b| rebase(&mut b.path));
        self.project_roots.iter_mut().for_each(rebase);
        self.class_models.iter_mut().for_each(rebase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert!(config.cache.enabled);
        assert!(config.cache.honor_package_markers);
        assert!(!config.strict_members);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_duplicate_bundle_rejected() {
        let config = ResolverConfig::default()
            .bundle("swt", "a", None)
            .bundle("swt", "b", None);

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate bundle id 'swt'"));
    }

    #[test]
    fn test_unsupported_version() {
        let result = ResolverConfig::from_yaml_str("version: 7\n");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 7, .. })
        ));
    }

    #[test]
    fn test_relative_paths_rebased() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("wbp.yaml");
        std::fs::write(
            &file,
            "version: 1\nbundles:\n  - id: core\n    path: meta\nclass_models:\n  - classes.json\n",
        )
        .unwrap();

        let config = ResolverConfig::from_yaml(&file).unwrap();
        assert_eq!(config.bundles[0].path, dir.path().join("meta"));
        assert_eq!(config.class_models[0], dir.path().join("classes.json"));
    }
}
