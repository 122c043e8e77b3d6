//! Bundle-backed resource locator
//!
//! Bundles are searched in registration order; the first bundle containing a
//! path wins. Project roots behave like bundles without an id, so their
//! resources never see bundle marker files.

use crate::config::ResolverConfig;
use crate::features::resources::domain::{
    BundleId, ResourceInfo, ResourceLocation, ToolkitDescription,
};
use crate::features::resources::ports::ResourceLocator;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
enum BundleRoot {
    Directory(PathBuf),
    Memory(BTreeMap<String, Arc<[u8]>>),
}

/// A metadata root, directory or in-memory
#[derive(Debug, Clone)]
pub struct Bundle {
    id: Option<BundleId>,
    toolkit: Option<ToolkitDescription>,
    root: BundleRoot,
}

impl Bundle {
    pub fn directory(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: Some(BundleId::new(id)),
            toolkit: None,
            root: BundleRoot::Directory(path.into()),
        }
    }

    pub fn memory(id: impl Into<String>) -> Self {
        Self {
            id: Some(BundleId::new(id)),
            toolkit: None,
            root: BundleRoot::Memory(BTreeMap::new()),
        }
    }

    /// Project class-path root on disk.
    pub fn project(path: impl Into<PathBuf>) -> Self {
        Self {
            id: None,
            toolkit: None,
            root: BundleRoot::Directory(path.into()),
        }
    }

    /// In-memory project class-path root.
    pub fn project_memory() -> Self {
        Self {
            id: None,
            toolkit: None,
            root: BundleRoot::Memory(BTreeMap::new()),
        }
    }

    pub fn with_toolkit(mut self, toolkit_id: impl Into<String>) -> Self {
        self.toolkit = Some(ToolkitDescription::new(toolkit_id));
        self
    }

    /// Adds an entry to an in-memory bundle; ignored for directory bundles.
    pub fn with_entry(mut self, path: impl Into<String>, content: impl AsRef<[u8]>) -> Self {
        if let BundleRoot::Memory(entries) = &mut self.root {
            entries.insert(path.into(), Arc::from(content.as_ref()));
        }
        self
    }

    pub fn id(&self) -> Option<&BundleId> {
        self.id.as_ref()
    }

    pub fn toolkit(&self) -> Option<&ToolkitDescription> {
        self.toolkit.as_ref()
    }

    fn locate(&self, path: &str) -> Option<ResourceLocation> {
        if path.split('/').any(|segment| segment == "..") {
            return None;
        }
        match &self.root {
            BundleRoot::Directory(root) => {
                let file = root.join(path);
                file.is_file().then_some(ResourceLocation::File(file))
            }
            BundleRoot::Memory(entries) => entries
                .get(path)
                .map(|bytes| ResourceLocation::Memory(Arc::clone(bytes))),
        }
    }

    pub fn has_entry(&self, path: &str) -> bool {
        self.locate(path).is_some()
    }

    /// Paths of all entries ending with `suffix`, sorted.
    pub fn entries_with_suffix(&self, suffix: &str) -> Vec<String> {
        let mut entries: Vec<String> = match &self.root {
            BundleRoot::Directory(root) => WalkDir::new(root)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .filter_map(|entry| relative_entry(root, entry.path()))
                .filter(|path| path.ends_with(suffix))
                .collect(),
            BundleRoot::Memory(entries) => entries
                .keys()
                .filter(|path| path.ends_with(suffix))
                .cloned()
                .collect(),
        };
        entries.sort();
        entries
    }
}

fn relative_entry(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(segments.join("/"))
}

#[derive(Debug, Clone, Default)]
pub struct BundleResourceLocator {
    bundles: Vec<Bundle>,
}

impl BundleResourceLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundles from the configuration first, then project roots.
    pub fn from_config(config: &ResolverConfig) -> Self {
        let mut locator = Self::new();
        for bundle in &config.bundles {
            let mut entry = Bundle::directory(bundle.id.clone(), bundle.path.clone());
            if let Some(toolkit) = &bundle.toolkit {
                entry = entry.with_toolkit(toolkit.clone());
            }
            locator.add(entry);
        }
        for root in &config.project_roots {
            locator.add(Bundle::project(root.clone()));
        }
        locator
    }

    pub fn with_bundle(mut self, bundle: Bundle) -> Self {
        self.add(bundle);
        self
    }

    pub fn add(&mut self, bundle: Bundle) {
        tracing::debug!(
            "Registered bundle {}",
            bundle.id.as_ref().map_or("<project>", |id| id.as_str())
        );
        self.bundles.push(bundle);
    }

    pub fn bundles(&self) -> &[Bundle] {
        &self.bundles
    }
}

impl ResourceLocator for BundleResourceLocator {
    fn find_resource(&self, path: &str) -> Option<ResourceInfo> {
        self.bundles.iter().find_map(|bundle| {
            bundle.locate(path).map(|location| ResourceInfo {
                path: path.to_string(),
                bundle: bundle.id.clone(),
                toolkit: bundle.toolkit.clone(),
                location,
            })
        })
    }

    fn bundle_has_entry(&self, bundle: &BundleId, entry: &str) -> bool {
        self.bundles
            .iter()
            .filter(|b| b.id.as_ref() == Some(bundle))
            .any(|b| b.has_entry(entry))
    }
}
