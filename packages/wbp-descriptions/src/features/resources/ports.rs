use crate::features::resources::domain::{BundleId, IconDescriptor, ResourceInfo};
use crate::shared::utils::class_resource_path;

/// Image extensions tried for component icons, in order.
pub const ICON_EXTENSIONS: &[&str] = &["png", "gif"];

/// Locates metadata resources and icons in bundles and the project class path.
pub trait ResourceLocator: Send + Sync {
    /// Finds a resource by slash separated path.
    fn find_resource(&self, path: &str) -> Option<ResourceInfo>;

    /// Whether `bundle` contains `entry` (marker files).
    fn bundle_has_entry(&self, bundle: &BundleId, entry: &str) -> bool;

    /// Icon `<class path><suffix>.{png,gif}` for a class.
    fn find_icon(&self, class_name: &str, suffix: &str) -> Option<IconDescriptor> {
        let base = class_resource_path(class_name);
        ICON_EXTENSIONS.iter().find_map(|ext| {
            self.find_resource(&format!("{}{}.{}", base, suffix, ext))
                .map(|resource| IconDescriptor::from(&resource))
        })
    }
}
