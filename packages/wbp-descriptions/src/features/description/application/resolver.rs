//! Description resolver
//!
//! Turns a class (plus an optional factory, exposing method or parameter
//! context) into a composed [`ComponentDescription`]:
//!
//! ```text
//! class ─► normalize ─► key ─► key-specific resource? ─► layers (generic → specific)
//!       ─► parse + fold each layer ─► toolkit fallback ─► icon ─► default creation
//!       ─► model check ─► join properties ─► cache flags ─► processors
//! ```

use crate::config::ResolverConfig;
use crate::errors::{DescriptionError, ErrorKind, Result};
use crate::features::class_model::{normalize_component_class, super_hierarchy, ClassLoader, ClassPath};
use crate::features::description::application::default_creation::configure_default_creation;
use crate::features::description::application::merge::{apply_layer, finish_layer, new_description, MergeContext};
use crate::features::description::domain::{
    ComponentDescription, ComponentDescriptionKey, InvocationDescription,
};
use crate::features::description::infrastructure::DescriptionCache;
use crate::features::description::ports::{DescriptionProcessor, ParameterNameProvider};
use crate::features::metadata::{parse_layer, RuleRegistry};
use crate::features::resources::{
    add_description_resources, should_cache_descriptions, should_cache_presentation,
    BundleResourceLocator, ClassResourceInfo, ResourceLocator,
};
use crate::shared::models::ClassInfo;
use crate::shared::utils::normalize_signature;
use std::sync::Arc;
use tracing::{debug, info};

/// Parameter that marks a description as not cacheable
pub const DONT_CACHE_PARAMETER: &str = "dontCacheDescription";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    pub strict_members: bool,
    /// Keep pure descriptions in the session cache
    pub cache_enabled: bool,
    /// Require the package marker for the `cached` flag
    pub honor_package_markers: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            strict_members: false,
            cache_enabled: true,
            honor_package_markers: true,
        }
    }
}

impl From<&ResolverConfig> for ResolverOptions {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            strict_members: config.strict_members,
            cache_enabled: config.cache.enabled,
            honor_package_markers: config.cache.honor_package_markers,
        }
    }
}

/// Static factory method producing a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryMethodRef {
    pub declaring_class: String,
    /// `createButton(a.Composite,int)`
    pub signature: String,
    pub return_class: String,
}

/// Method parameter treated as a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRef {
    /// Signature of the host method declaring the parameter
    pub method_signature: String,
    pub index: usize,
    pub type_name: String,
}

impl ParameterRef {
    /// `init_a.Composite_.0`
    pub fn suffix(&self) -> String {
        format!("{}.{}", normalize_signature(&self.method_signature), self.index)
    }
}

pub struct DescriptionResolver {
    loader: Arc<dyn ClassLoader>,
    locator: Arc<dyn ResourceLocator>,
    cache: Arc<DescriptionCache>,
    registry: RuleRegistry,
    processors: Vec<Arc<dyn DescriptionProcessor>>,
    parameter_names: Option<Arc<dyn ParameterNameProvider>>,
    options: ResolverOptions,
}

pub struct DescriptionResolverBuilder {
    loader: Arc<dyn ClassLoader>,
    locator: Arc<dyn ResourceLocator>,
    cache: Option<Arc<DescriptionCache>>,
    registry: Option<RuleRegistry>,
    processors: Vec<Arc<dyn DescriptionProcessor>>,
    parameter_names: Option<Arc<dyn ParameterNameProvider>>,
    options: ResolverOptions,
}

impl DescriptionResolverBuilder {
    /// Shares a cache between resolvers of one session.
    pub fn cache(mut self, cache: Arc<DescriptionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Replaces the standard rules, e.g. to add custom patterns.
    pub fn registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Appends a processor; processors run in the order they are added.
    pub fn processor(mut self, processor: impl DescriptionProcessor + 'static) -> Self {
        self.processors.push(Arc::new(processor));
        self
    }

    pub fn parameter_names(mut self, provider: impl ParameterNameProvider + 'static) -> Self {
        self.parameter_names = Some(Arc::new(provider));
        self
    }

    pub fn options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> DescriptionResolver {
        DescriptionResolver {
            loader: self.loader,
            locator: self.locator,
            cache: self.cache.unwrap_or_default(),
            registry: self.registry.unwrap_or_else(RuleRegistry::standard),
            processors: self.processors,
            parameter_names: self.parameter_names,
            options: self.options,
        }
    }
}

impl DescriptionResolver {
    pub fn builder(
        loader: impl ClassLoader + 'static,
        locator: impl ResourceLocator + 'static,
    ) -> DescriptionResolverBuilder {
        DescriptionResolverBuilder {
            loader: Arc::new(loader),
            locator: Arc::new(locator),
            cache: None,
            registry: None,
            processors: Vec::new(),
            parameter_names: None,
            options: ResolverOptions::default(),
        }
    }

    /// Resolver over the bundles and class models named by `config`.
    pub fn from_config(config: &ResolverConfig) -> Result<Self> {
        config.validate()?;
        let mut classes = ClassPath::new();
        for path in &config.class_models {
            classes.add_json_file(path)?;
        }
        Ok(Self::builder(classes, BundleResourceLocator::from_config(config))
            .options(ResolverOptions::from(config))
            .build())
    }

    pub fn cache(&self) -> &DescriptionCache {
        &self.cache
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Ends the current session, keeping marker-cached descriptions.
    pub fn invalidate_session(&self) {
        self.cache.invalidate_session();
    }

    /// Description of the class named `class_name`.
    pub fn describe(&self, class_name: &str) -> Result<Arc<ComponentDescription>> {
        let class = self.loader.load_class(class_name)?;
        self.describe_class(&class)
    }

    /// Context-free description, served from the cache when possible.
    pub fn describe_class(&self, class: &Arc<ClassInfo>) -> Result<Arc<ComponentDescription>> {
        let class = normalize_component_class(self.loader.as_ref(), class)?;
        if self.options.cache_enabled {
            if let Some(description) = self.cache.get(&class.name) {
                return Ok(description);
            }
        }

        let key = ComponentDescriptionKey::new(class.name.clone());
        let description = Arc::new(self.resolve(key, &class, Vec::new())?);
        if self.options.cache_enabled {
            return Ok(self.cache.insert(description));
        }
        Ok(description)
    }

    /// Description of a component created by a factory method.
    pub fn describe_factory(&self, factory: &FactoryMethodRef) -> Result<Arc<ComponentDescription>> {
        let class = self.loader.load_class(&factory.return_class)?;
        let host = ComponentDescriptionKey::new(factory.declaring_class.clone());
        let key = ComponentDescriptionKey::contextual(
            class.name.clone(),
            &host,
            normalize_signature(&factory.signature),
        );
        self.describe_key_specific(&class, key)
    }

    /// Description of a child exposed by `host` through `method_name`.
    pub fn describe_exposed(
        &self,
        host: &ComponentDescription,
        method_name: &str,
        return_class: &str,
    ) -> Result<Arc<ComponentDescription>> {
        let class = self.loader.load_class(return_class)?;
        let key = ComponentDescriptionKey::contextual(class.name.clone(), &host.key, method_name);
        self.describe_key_specific(&class, key)
    }

    /// Description of a component passed as a parameter of a `host` method.
    ///
    /// Every class of the host hierarchy may contribute
    /// `<HostClass>.<signature>.<index>.wbp-component.xml`.
    pub fn describe_parameter(
        &self,
        host: &ComponentDescription,
        parameter: &ParameterRef,
    ) -> Result<Arc<ComponentDescription>> {
        let class = self.loader.load_class(&parameter.type_name)?;
        let suffix = parameter.suffix();

        let mut host_hierarchy = super_hierarchy(self.loader.as_ref(), &host.class_info)?;
        host_hierarchy.reverse();
        let additional: Vec<ClassResourceInfo> = host_hierarchy
            .iter()
            .filter_map(|host_class| {
                let host_key = ComponentDescriptionKey::new(host_class.name.clone());
                let path = ComponentDescriptionKey::contextual(class.name.clone(), &host_key, suffix.clone())
                    .description_path();
                self.locator
                    .find_resource(&path)
                    .map(|resource| ClassResourceInfo::new(class.name.clone(), resource))
            })
            .collect();

        if additional.is_empty() {
            return self.describe_class(&class);
        }
        let key = ComponentDescriptionKey::contextual(class.name.clone(), &host.key, suffix);
        Ok(Arc::new(self.resolve(key, &class, additional)?))
    }

    /// Fills missing parameter names once per invocation.
    ///
    /// Provider failures are logged and otherwise ignored.
    pub fn ensure_initialized(&self, invocation: &mut impl InvocationDescription) {
        if invocation.is_initialized() {
            return;
        }
        invocation.set_initialized(true);
        let Some(provider) = &self.parameter_names else {
            return;
        };

        let signature = invocation.signature();
        match provider.parameter_names(invocation.declaring_class(), &signature) {
            Ok(Some(names)) => {
                for parameter in invocation.parameters_mut() {
                    if parameter.name.is_none() {
                        parameter.name = names.get(parameter.index).cloned();
                    }
                }
            }
            Ok(None) => {}
            Err(err) => debug!(signature = %signature, error = %err, "parameter names unavailable"),
        }
    }

    fn describe_key_specific(
        &self,
        class: &Arc<ClassInfo>,
        key: ComponentDescriptionKey,
    ) -> Result<Arc<ComponentDescription>> {
        match self.locator.find_resource(&key.description_path()) {
            Some(resource) => {
                let additional = vec![ClassResourceInfo::new(class.name.clone(), resource)];
                Ok(Arc::new(self.resolve(key, class, additional)?))
            }
            None => self.describe_class(class),
        }
    }

    fn resolve(
        &self,
        key: ComponentDescriptionKey,
        class: &Arc<ClassInfo>,
        additional: Vec<ClassResourceInfo>,
    ) -> Result<ComponentDescription> {
        self.resolve_layers(key, class, additional)
            .map_err(|e| e.or_class(&class.name))
    }

    fn resolve_layers(
        &self,
        key: ComponentDescriptionKey,
        class: &Arc<ClassInfo>,
        additional: Vec<ClassResourceInfo>,
    ) -> Result<ComponentDescription> {
        let hierarchy = super_hierarchy(self.loader.as_ref(), class)?;
        let mut description = new_description(key, Arc::clone(class));

        let mut infos = add_description_resources(self.locator.as_ref(), &hierarchy);
        if infos.is_empty() {
            return Err(DescriptionError::no_descriptions(&class.name));
        }
        infos.extend(additional);

        let ctx = MergeContext {
            hierarchy: &hierarchy,
            loader: self.loader.as_ref(),
            locator: self.locator.as_ref(),
            strict_members: self.options.strict_members,
        };
        for info in &infos {
            let layer = parse_layer(&self.registry, &info.resource)?;
            apply_layer(&mut description, &layer, &info.class_name, &ctx)?;
            finish_layer(&mut description, &info.class_name);
        }

        if description.toolkit.is_none() {
            description.toolkit = infos
                .iter()
                .rev()
                .find_map(|info| info.resource.toolkit.clone());
            if description.toolkit.is_none() {
                return Err(DescriptionError::no_toolkit(&class.name));
            }
        }

        self.set_icon(&mut description, &class.name);
        configure_default_creation(&mut description);

        if description.model_class.is_none() {
            return Err(DescriptionError::no_model_class(&class.name));
        }
        description.join_properties();

        if let Some(last) = infos.last() {
            let marker = !self.options.honor_package_markers
                || should_cache_descriptions(self.locator.as_ref(), last, &class.name);
            description.cached = description.key.is_pure()
                && description.parameter(DONT_CACHE_PARAMETER) != Some("true")
                && marker;
            description.presentation_cached =
                should_cache_presentation(self.locator.as_ref(), last, &class.name);
        }

        for processor in &self.processors {
            processor.process(&mut description).map_err(|e| match e.kind {
                ErrorKind::Processor => e,
                _ => DescriptionError::processor(format!("processor {} failed", processor.name()))
                    .with_source(e),
            })?;
        }

        info!(
            key = %description.key,
            layers = infos.len(),
            cached = description.cached,
            "component description resolved"
        );
        Ok(description)
    }

    /// Icon of the class itself, then its interfaces, then its superclass.
    ///
    /// Never replaces an icon that is already set.
    fn set_icon(&self, description: &mut ComponentDescription, class_name: &str) {
        if description.icon.is_some() {
            return;
        }
        if let Some(icon) = self.locator.find_icon(class_name, "") {
            description.icon = Some(icon);
            return;
        }
        let class = match self.loader.load_class(class_name) {
            Ok(class) => class,
            Err(err) => {
                debug!(class = class_name, error = %err, "icon lookup stops at unloadable class");
                return;
            }
        };
        for interface in &class.interfaces {
            if description.icon.is_some() {
                return;
            }
            self.set_icon(description, interface);
        }
        if let Some(superclass) = &class.superclass {
            self.set_icon(description, superclass);
        }
    }
}
