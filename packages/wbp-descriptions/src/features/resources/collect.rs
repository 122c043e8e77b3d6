//! Metadata layer collection and cache markers.

use crate::features::resources::domain::ClassResourceInfo;
use crate::features::resources::ports::ResourceLocator;
use crate::shared::models::ClassInfo;
use crate::shared::utils::{class_resource_path, package_of};
use std::sync::Arc;

pub const DESCRIPTION_SUFFIX: &str = ".wbp-component.xml";

/// Package marker enabling description caching.
pub const CACHE_DESCRIPTIONS_MARKER: &str = ".wbp-cache-descriptions";

/// Bundle marker enabling presentation caching.
pub const CACHE_PRESENTATIONS_MARKER: &str = "wbp-meta/.wbp-cache-presentations";

/// `a/b/Button` → `a/b/Button.wbp-component.xml`
pub fn description_path(base: &str) -> String {
    format!("{}{}", base, DESCRIPTION_SUFFIX)
}

/// Metadata resources of `hierarchy` (class first), returned generic → specific.
pub fn add_description_resources(
    locator: &dyn ResourceLocator,
    hierarchy: &[Arc<ClassInfo>],
) -> Vec<ClassResourceInfo> {
    let mut infos: Vec<ClassResourceInfo> = hierarchy
        .iter()
        .filter_map(|class| {
            let path = description_path(&class_resource_path(&class.name));
            locator
                .find_resource(&path)
                .map(|resource| ClassResourceInfo::new(class.name.clone(), resource))
        })
        .collect();
    infos.reverse();
    infos
}

/// Whether the bundle of `info` has `marker` in the package of `class_name`.
///
/// Resources without a bundle never have markers.
pub fn has_package_marker(
    locator: &dyn ResourceLocator,
    info: &ClassResourceInfo,
    class_name: &str,
    marker: &str,
) -> bool {
    let Some(bundle) = &info.resource.bundle else {
        return false;
    };
    let package = class_resource_path(package_of(class_name));
    let entry = if package.is_empty() {
        marker.to_string()
    } else {
        format!("{}/{}", package, marker)
    };
    locator.bundle_has_entry(bundle, &entry)
}

pub fn should_cache_descriptions(
    locator: &dyn ResourceLocator,
    last: &ClassResourceInfo,
    class_name: &str,
) -> bool {
    has_package_marker(locator, last, class_name, CACHE_DESCRIPTIONS_MARKER)
}

/// Presentation caching needs the most specific layer to be the class's own.
pub fn should_cache_presentation(
    locator: &dyn ResourceLocator,
    last: &ClassResourceInfo,
    class_name: &str,
) -> bool {
    if last.class_name != class_name {
        return false;
    }
    match &last.resource.bundle {
        Some(bundle) => locator.bundle_has_entry(bundle, CACHE_PRESENTATIONS_MARKER),
        None => false,
    }
}
