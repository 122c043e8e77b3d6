//! Resource model: metadata files, their bundles and icons.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Cursor, Read};
use std::path::PathBuf;
use std::sync::Arc;

/// Identifier of a metadata bundle
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BundleId(pub String);

impl BundleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BundleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// UI framework family a component belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolkitDescription {
    pub id: String,
}

impl ToolkitDescription {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Where the bytes of a resource live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocation {
    File(PathBuf),
    Memory(Arc<[u8]>),
}

/// A located resource, e.g. `a/b/Button.wbp-component.xml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceInfo {
    /// Logical, slash separated path
    pub path: String,
    /// Owning bundle, `None` for project class-path resources
    pub bundle: Option<BundleId>,
    /// Toolkit contributed by the owning bundle
    pub toolkit: Option<ToolkitDescription>,
    pub location: ResourceLocation,
}

impl ResourceInfo {
    /// Opens the resource; the reader is released when dropped.
    pub fn open(&self) -> std::io::Result<Box<dyn Read + '_>> {
        match &self.location {
            ResourceLocation::File(path) => Ok(Box::new(std::fs::File::open(path)?)),
            ResourceLocation::Memory(bytes) => Ok(Box::new(Cursor::new(&bytes[..]))),
        }
    }

    /// Human readable location for diagnostics.
    pub fn describe(&self) -> String {
        match (&self.bundle, &self.location) {
            (_, ResourceLocation::File(path)) => path.display().to_string(),
            (Some(bundle), ResourceLocation::Memory(_)) => format!("{}:{}", bundle, self.path),
            (None, ResourceLocation::Memory(_)) => self.path.clone(),
        }
    }
}

/// Icon image resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDescriptor {
    pub path: String,
    pub bundle: Option<BundleId>,
}

impl From<&ResourceInfo> for IconDescriptor {
    fn from(resource: &ResourceInfo) -> Self {
        Self {
            path: resource.path.clone(),
            bundle: resource.bundle.clone(),
        }
    }
}

/// One rung of the inheritance ladder and the metadata resource for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassResourceInfo {
    pub class_name: String,
    pub resource: ResourceInfo,
}

impl ClassResourceInfo {
    pub fn new(class_name: impl Into<String>, resource: ResourceInfo) -> Self {
        Self {
            class_name: class_name.into(),
            resource,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_memory_resource() {
        let resource = ResourceInfo {
            path: "a/Button.wbp-component.xml".to_string(),
            bundle: Some(BundleId::new("core")),
            toolkit: None,
            location: ResourceLocation::Memory(Arc::from(&b"<component/>"[..])),
        };

        let mut content = String::new();
        resource.open().unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "<component/>");
        assert_eq!(resource.describe(), "core:a/Button.wbp-component.xml");
    }

    #[test]
    fn test_open_missing_file() {
        let resource = ResourceInfo {
            path: "a/Gone.wbp-component.xml".to_string(),
            bundle: None,
            toolkit: None,
            location: ResourceLocation::File(PathBuf::from("/nonexistent/a/Gone.wbp-component.xml")),
        };
        assert!(resource.open().is_err());
    }
}
