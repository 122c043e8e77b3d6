//! Metadata resources: locating `*.wbp-component.xml`, icons and markers.

pub mod bundle_locator;
pub mod collect;
pub mod domain;
pub mod ports;

pub use bundle_locator::{Bundle, BundleResourceLocator};
pub use collect::{
    add_description_resources, description_path, has_package_marker, should_cache_descriptions,
    should_cache_presentation, CACHE_DESCRIPTIONS_MARKER, CACHE_PRESENTATIONS_MARKER,
    DESCRIPTION_SUFFIX,
};
pub use domain::{
    BundleId, ClassResourceInfo, IconDescriptor, ResourceInfo, ResourceLocation,
    ToolkitDescription,
};
pub use ports::ResourceLocator;
