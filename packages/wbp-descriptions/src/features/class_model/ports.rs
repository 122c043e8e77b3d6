use crate::errors::Result;
use crate::shared::models::ClassInfo;
use std::sync::Arc;

/// Loads classes by binary name from a project class path.
pub trait ClassLoader: Send + Sync {
    fn load_class(&self, name: &str) -> Result<Arc<ClassInfo>>;
}

impl<L: ClassLoader + ?Sized> ClassLoader for Arc<L> {
    fn load_class(&self, name: &str) -> Result<Arc<ClassInfo>> {
        (**self).load_class(name)
    }
}
