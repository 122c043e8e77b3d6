//! Folding layer documents into a description.
//!
//! Per-field rules, applied in this order for every layer:
//!
//! | field                              | rule                                      |
//! |------------------------------------|-------------------------------------------|
//! | toolkit, model, order, description | replace when the layer declares it        |
//! | creations                          | append (cleared after ancestor layers)    |
//! | creation-default                   | replace (cleared after ancestor layers)   |
//! | morph targets                      | `noInherit` clears, then append           |
//! | exposing rules                     | append, last match wins at query time     |
//! | parameters                         | replace by name                           |
//! | properties                         | add if absent, configure by id or title   |
//! | constructors                       | enrich the introspected one               |
//! | methods                            | resolve against the class model, merge    |
//! | method order                       | replace default, set per method           |

use crate::errors::{DescriptionError, Result};
use crate::features::class_model::{bean_properties, public_fields, ClassLoader};
use crate::features::description::domain::{
    ComponentDescription, ComponentDescriptionKey, ConstructorDescription, CreationDescription,
    InvocationDescription, MethodDescription, MethodOrder, ParameterDescription,
    PropertyConfiguration, PropertyDescription, PropertyKind,
};
use crate::features::metadata::{LayerDocument, MethodDeclaration, MethodPropertyDeclaration};
use crate::features::resources::{ResourceLocator, ToolkitDescription};
use crate::shared::models::{ClassInfo, MethodInfo};
use crate::shared::utils::{member_signature, wildcard_regex};
use std::sync::Arc;
use tracing::warn;

/// Collaborators needed while folding layers
pub struct MergeContext<'a> {
    /// Component class first, then its superclasses
    pub hierarchy: &'a [Arc<ClassInfo>],
    pub loader: &'a dyn ClassLoader,
    pub locator: &'a dyn ResourceLocator,
    /// Reject metadata naming members the class does not have
    pub strict_members: bool,
}

impl<'a> MergeContext<'a> {
    /// Public instance method with `signature` and the class declaring it.
    fn find_method(&self, signature: &str) -> Option<(&'a str, &'a MethodInfo)> {
        self.hierarchy.iter().find_map(|class| {
            class
                .find_method(signature)
                .filter(|m| m.is_public_instance())
                .map(|m| (class.name.as_str(), m))
        })
    }

    /// Every public instance method, subclass declarations first.
    fn public_methods(&self) -> Vec<(&'a str, &'a MethodInfo)> {
        let mut seen = std::collections::HashSet::new();
        self.hierarchy
            .iter()
            .flat_map(|class| class.methods.iter().map(move |m| (class.name.as_str(), m)))
            .filter(|(_, m)| m.is_public_instance() && seen.insert(m.signature()))
            .collect()
    }

    fn unknown_member(&self, description: &ComponentDescription, message: String) -> Result<()> {
        if self.strict_members {
            return Err(DescriptionError::unknown_member(message).with_class(&description.component_class));
        }
        warn!(component = %description.component_class, "{}, ignored", message);
        Ok(())
    }
}

/// Fresh description with the constructors declared by the class.
pub fn new_description(key: ComponentDescriptionKey, class: Arc<ClassInfo>) -> ComponentDescription {
    let constructors = class
        .constructors
        .iter()
        .map(|c| ConstructorDescription::new(class.name.clone(), &c.parameter_types))
        .collect();
    let mut description = ComponentDescription::new(key, class);
    description.constructors = constructors;
    description
}

/// Applies one layer; `layer_class` is the class the layer was found for.
pub fn apply_layer(
    description: &mut ComponentDescription,
    layer: &LayerDocument,
    layer_class: &str,
    ctx: &MergeContext<'_>,
) -> Result<()> {
    description.current_class = Some(layer_class.to_string());

    if let Some(toolkit) = &layer.toolkit {
        description.toolkit = Some(ToolkitDescription::new(toolkit.clone()));
    }
    if let Some(model_class) = &layer.model_class {
        description.model_class = Some(model_class.clone());
    }
    if let Some(order) = &layer.order {
        description.order = Some(order.clone());
    }
    if let Some(text) = &layer.description {
        description.description = Some(text.clone());
    }

    for creation in &layer.creations {
        let creation = with_creation_icon(description, creation.clone(), ctx);
        description.add_creation(creation);
    }
    if let Some(creation) = &layer.creation_default {
        description.creation_default = Some(with_creation_icon(description, creation.clone(), ctx));
    }

    apply_morph_targets(description, layer, ctx);
    description
        .exposing_rules
        .extend(layer.exposing_rules.iter().cloned());
    description.parameters.extend(
        layer
            .parameters
            .iter()
            .map(|(name, value)| (name.clone(), value.clone())),
    );

    apply_properties(description, layer, ctx)?;
    apply_constructors(description, layer, ctx)?;
    apply_methods(description, layer, ctx)?;
    Ok(())
}

/// Drops what a subclass must not inherit from an ancestor's layer.
pub fn finish_layer(description: &mut ComponentDescription, layer_class: &str) {
    if layer_class != description.component_class {
        description.clear_creations();
        description.description = None;
    }
}

fn with_creation_icon(
    description: &ComponentDescription,
    mut creation: CreationDescription,
    ctx: &MergeContext<'_>,
) -> CreationDescription {
    if let Some(id) = &creation.id {
        creation.icon = ctx
            .locator
            .find_icon(&description.component_class, &format!("_{}", id));
    }
    creation
}

fn apply_morph_targets(description: &mut ComponentDescription, layer: &LayerDocument, ctx: &MergeContext<'_>) {
    let Some(morph_targets) = &layer.morph_targets else {
        return;
    };
    if morph_targets.no_inherit {
        description.morphing_targets.clear();
    }
    for target in &morph_targets.targets {
        match ctx.loader.load_class(&target.class_name) {
            Ok(_) => description.morphing_targets.push(target.clone()),
            Err(err) => warn!(
                component = %description.component_class,
                target = %target.class_name,
                error = %err,
                "morphing target skipped"
            ),
        }
    }
}

fn apply_properties(
    description: &mut ComponentDescription,
    layer: &LayerDocument,
    ctx: &MergeContext<'_>,
) -> Result<()> {
    if layer.standard_bean_properties {
        for bean in bean_properties(ctx.hierarchy) {
            if description.property(&bean.setter).is_some() {
                continue;
            }
            let mut property = PropertyDescription::new(bean.setter, bean.name, PropertyKind::BeanSetter)
                .with_type(bean.type_name);
            property.getter = bean.getter;
            description.add_property(property);
        }
    }

    if layer.public_field_properties {
        for field in public_fields(ctx.hierarchy) {
            if description.property(&field.name).is_some() {
                continue;
            }
            let property = PropertyDescription::new(field.name.clone(), field.name, PropertyKind::Field)
                .with_type(field.type_name);
            description.add_property(property);
        }
    }

    for declaration in &layer.method_properties {
        apply_method_property(description, declaration, ctx)?;
    }

    for property in &layer.configurable_properties {
        description.add_property(property.clone());
    }

    for (category, names) in &layer.categories {
        for name in names {
            let mut configuration = PropertyConfiguration::new(name.clone());
            configuration.category = Some(*category);
            description.configure_property(configuration);
        }
    }

    for name in &layer.no_default_value {
        let mut configuration = PropertyConfiguration::new(name.clone());
        configuration.no_default_value = true;
        description.configure_property(configuration);
    }

    for tag in &layer.property_tags {
        for name in &tag.properties {
            let mut configuration = PropertyConfiguration::new(name.clone());
            configuration.tags.insert(tag.name.clone(), tag.value.clone());
            description.configure_property(configuration);
        }
    }

    for configuration in &layer.properties {
        description.configure_property(configuration.clone());
    }
    Ok(())
}

fn apply_method_property(
    description: &mut ComponentDescription,
    declaration: &MethodPropertyDeclaration,
    ctx: &MergeContext<'_>,
) -> Result<()> {
    let Some((_, method)) = ctx.find_method(&declaration.method) else {
        return ctx.unknown_member(
            description,
            format!("no method {} for property '{}'", declaration.method, declaration.title),
        );
    };

    let (kind, type_name) = if declaration.single {
        if method.parameter_types.len() != 1 {
            return Err(DescriptionError::load(format!(
                "single-value property '{}' needs a one-argument method, {} has {}",
                declaration.title,
                declaration.method,
                method.parameter_types.len()
            ))
            .with_class(&description.component_class));
        }
        (PropertyKind::SingleMethod, Some(method.parameter_types[0].clone()))
    } else {
        (PropertyKind::Method, None)
    };

    let mut property = PropertyDescription::new(method.signature(), declaration.title.clone(), kind);
    property.type_name = type_name;
    description.add_property(property);
    if let Some(configuration) = &declaration.configuration {
        description.configure_property(configuration.clone());
    }
    Ok(())
}

fn apply_constructors(
    description: &mut ComponentDescription,
    layer: &LayerDocument,
    ctx: &MergeContext<'_>,
) -> Result<()> {
    for declaration in &layer.constructors {
        let signature = member_signature("<init>", &declaration.parameter_types());
        match description.constructor_mut(&signature) {
            Some(constructor) => enrich_parameters(constructor, &declaration.parameters),
            None => ctx.unknown_member(description, format!("no constructor {}", signature))?,
        }
    }
    Ok(())
}

fn apply_methods(
    description: &mut ComponentDescription,
    layer: &LayerDocument,
    ctx: &MergeContext<'_>,
) -> Result<()> {
    for declaration in &layer.methods {
        apply_method(description, declaration, ctx)?;
    }

    for operation in &layer.method_operations {
        let regex = wildcard_regex(&operation.signature).map_err(|e| {
            DescriptionError::load(format!("invalid method pattern '{}'", operation.signature))
                .with_source(e)
                .with_class(&description.component_class)
        })?;
        if operation.include {
            let mut matched = false;
            for (declaring_class, method) in ctx.public_methods() {
                let signature = method.signature();
                if !regex.is_match(&signature) {
                    continue;
                }
                matched = true;
                if description.method(&signature).is_none() {
                    description.methods.push(method_description(declaring_class, method));
                }
            }
            if !matched && !operation.signature.contains('*') {
                ctx.unknown_member(description, format!("no method {}", operation.signature))?;
            }
        } else {
            description
                .methods
                .retain(|method| !regex.is_match(&method.signature()));
        }
    }

    if let Some(order) = layer.method_order.default {
        description.default_method_order = Some(order);
    }
    for (signature, order) in &layer.method_order.methods {
        set_method_order(description, signature, *order, ctx)?;
    }
    Ok(())
}

fn apply_method(
    description: &mut ComponentDescription,
    declaration: &MethodDeclaration,
    ctx: &MergeContext<'_>,
) -> Result<()> {
    let signature = member_signature(&declaration.name, &declaration.parameter_types());
    if description.method(&signature).is_none() {
        match ctx.find_method(&signature) {
            Some((declaring_class, method)) => description
                .methods
                .push(method_description(declaring_class, method)),
            None => return ctx.unknown_member(description, format!("no method {}", signature)),
        }
    }

    if let Some(method) = description.method_mut(&signature) {
        enrich_parameters(method, &declaration.parameters);
        if declaration.order.is_some() {
            method.order = declaration.order;
        }
        method
            .tags
            .extend(declaration.tags.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    Ok(())
}

fn set_method_order(
    description: &mut ComponentDescription,
    signature: &str,
    order: MethodOrder,
    ctx: &MergeContext<'_>,
) -> Result<()> {
    if description.method(signature).is_none() {
        match ctx.find_method(signature) {
            Some((declaring_class, method)) => description
                .methods
                .push(method_description(declaring_class, method)),
            None => return ctx.unknown_member(description, format!("no method {} to order", signature)),
        }
    }
    if let Some(method) = description.method_mut(signature) {
        method.order = Some(order);
    }
    Ok(())
}

fn method_description(declaring_class: &str, method: &MethodInfo) -> MethodDescription {
    MethodDescription::new(
        declaring_class,
        method.name.clone(),
        &method.parameter_types,
        method.return_type.clone(),
    )
}

fn enrich_parameters(invocation: &mut impl InvocationDescription, declared: &[ParameterDescription]) {
    for (parameter, declared) in invocation.parameters_mut().iter_mut().zip(declared) {
        parameter.enrich(declared);
    }
}
