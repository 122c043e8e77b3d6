//! Resolver builders

use super::fixtures::{description_entry, widget_classes};
use wbp_descriptions::{Bundle, BundleResourceLocator, ClassPath, DescriptionResolver};

/// In-memory bundle set plus class model, turned into a resolver.
pub struct ResolverFixture {
    classes: ClassPath,
    bundles: Vec<Bundle>,
}

impl ResolverFixture {
    /// Widget classes with one bundle `core` of toolkit `swt`.
    pub fn new() -> Self {
        Self {
            classes: widget_classes(),
            bundles: vec![Bundle::memory("core").with_toolkit("swt")],
        }
    }

    pub fn with_classes(mut self, classes: ClassPath) -> Self {
        self.classes = classes;
        self
    }

    /// Starts a new bundle; later entries go into it.
    pub fn with_bundle(mut self, bundle: Bundle) -> Self {
        self.bundles.push(bundle);
        self
    }

    /// Adds a raw entry to the most recent bundle.
    pub fn with_entry(mut self, path: &str, content: impl AsRef<[u8]>) -> Self {
        if let Some(bundle) = self.bundles.pop() {
            self.bundles.push(bundle.with_entry(path, content));
        }
        self
    }

    /// Adds `<class>.wbp-component.xml` to the most recent bundle.
    pub fn with_description(self, class_name: &str, xml: &str) -> Self {
        let path = description_entry(class_name);
        self.with_entry(&path, xml)
    }

    pub fn locator(&self) -> BundleResourceLocator {
        self.bundles
            .iter()
            .cloned()
            .fold(BundleResourceLocator::new(), BundleResourceLocator::with_bundle)
    }

    pub fn build(self) -> DescriptionResolver {
        let locator = self.locator();
        DescriptionResolver::builder(self.classes, locator).build()
    }

    pub fn builder(self) -> wbp_descriptions::features::description::DescriptionResolverBuilder {
        let locator = self.locator();
        DescriptionResolver::builder(self.classes, locator)
    }
}
