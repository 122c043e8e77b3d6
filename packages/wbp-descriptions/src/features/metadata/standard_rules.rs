//! Rules for the `wbp-component.xml` format.

use crate::errors::{DescriptionError, Result};
use crate::features::description::domain::{
    CreationDescription, CreationInvocation, CreationTypeParameter, EditorDescription,
    EditorParameters, ExposingRule, MethodOrder, MorphingTargetDescription, ParameterDescription,
    PropertyCategory, PropertyConfiguration, PropertyDescription, PropertyKind,
};
use crate::features::metadata::layer::{
    ConstructorDeclaration, MethodDeclaration, MethodOperation, MethodPropertyDeclaration,
    MorphTargets, PropertyTagDeclaration,
};
use crate::features::metadata::rules::{misplaced, FnRule, Frame, ParseContext, RuleRegistry};
use xmltree::Element;

const CREATION_PATTERNS: &[&str] = &["component/creation", "component/creation-default"];
const CONFIGURATION_PATTERNS: &[&str] = &["component/property", "component/method-single-property"];
const INVOCATION_PATTERNS: &[&str] = &["component/constructors/constructor", "component/methods/method"];

const CATEGORY_PATTERNS: &[(&str, PropertyCategory)] = &[
    ("component/properties-preferred", PropertyCategory::Preferred),
    ("component/properties-normal", PropertyCategory::Normal),
    ("component/properties-advanced", PropertyCategory::Advanced),
    ("component/properties-advanced-really", PropertyCategory::AdvancedReally),
    ("component/properties-hidden", PropertyCategory::Hidden),
];

fn required(element: &Element, attribute: &str) -> Result<String> {
    element.attributes.get(attribute).cloned().ok_or_else(|| {
        DescriptionError::load(format!(
            "<{}> requires attribute '{}'",
            element.name, attribute
        ))
    })
}

fn optional(element: &Element, attribute: &str) -> Option<String> {
    element.attributes.get(attribute).cloned()
}

fn flag(element: &Element, attribute: &str) -> Result<bool> {
    match element.attributes.get(attribute).map(String::as_str) {
        None | Some("false") => Ok(false),
        Some("true") => Ok(true),
        Some(other) => Err(DescriptionError::load(format!(
            "<{}> attribute '{}' must be true or false, found '{}'",
            element.name, attribute, other
        ))),
    }
}

/// Trimmed text content, empty for elements without text.
fn text(element: &Element) -> String {
    element
        .get_text()
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

fn names(element: &Element) -> Result<Vec<String>> {
    Ok(required(element, "names")?
        .split_whitespace()
        .map(str::to_string)
        .collect())
}

fn method_order(element: &Element) -> Result<MethodOrder> {
    required(element, "order")?
        .parse()
        .map_err(DescriptionError::load)
}

fn creation_mut<'a>(ctx: &'a mut ParseContext, element: &Element) -> Result<&'a mut CreationDescription> {
    match ctx.top_mut() {
        Some(Frame::Creation { creation, .. }) => Ok(creation),
        other => Err(misplaced(element, other.map(|f| f.name()))),
    }
}

fn editor_parameters_mut<'a>(
    ctx: &'a mut ParseContext,
    element: &Element,
) -> Result<&'a mut EditorParameters> {
    match ctx.top_mut() {
        Some(Frame::Editor(editor)) => Ok(&mut editor.parameters),
        Some(Frame::ConfigurableProperty(property)) => Ok(&mut property.parameters),
        other => Err(misplaced(element, other.map(|f| f.name()))),
    }
}

/// Registers every standard rule.
pub fn register(registry: &mut RuleRegistry) {
    register_component(registry);
    register_creations(registry);
    register_morphing(registry);
    register_properties(registry);
    register_invocations(registry);
    register_method_order(registry);
    register_editors(registry);
}

fn register_component(registry: &mut RuleRegistry) {
    registry
        .add(
            "component/toolkit",
            FnRule::on_begin(|ctx, element| {
                ctx.document.toolkit = Some(required(element, "id")?);
                Ok(())
            }),
        )
        .add(
            "component/model",
            FnRule::on_begin(|ctx, element| {
                ctx.document.model_class = Some(required(element, "class")?);
                Ok(())
            }),
        )
        .add(
            "component/order",
            FnRule::on_begin(|ctx, element| {
                ctx.document.order = Some(text(element));
                Ok(())
            }),
        )
        .add(
            "component/description",
            FnRule::on_begin(|ctx, element| {
                ctx.document.description = Some(text(element));
                Ok(())
            }),
        )
        .add(
            "component/parameters/parameter",
            FnRule::on_begin(|ctx, element| {
                ctx.document
                    .parameters
                    .insert(required(element, "name")?, text(element));
                Ok(())
            }),
        );

    for (pattern, include) in [
        ("component/exposing-rules/include", true),
        ("component/exposing-rules/exclude", false),
    ] {
        registry.add(
            pattern,
            FnRule::on_begin(move |ctx, element| {
                ctx.document.exposing_rules.push(ExposingRule {
                    include,
                    package: optional(element, "package"),
                    method: optional(element, "method"),
                });
                Ok(())
            }),
        );
    }
}

fn register_creations(registry: &mut RuleRegistry) {
    for &pattern in CREATION_PATTERNS {
        let default = pattern.ends_with("-default");
        registry.add(
            pattern,
            FnRule::on_begin(move |ctx, element| {
                ctx.push(Frame::Creation {
                    creation: CreationDescription::new(optional(element, "id"), optional(element, "name")),
                    default,
                });
                Ok(())
            })
            .and_end(|ctx, element| match ctx.pop(element)? {
                Frame::Creation {
                    creation,
                    default: true,
                } => {
                    ctx.document.creation_default = Some(creation);
                    Ok(())
                }
                Frame::Creation { creation, .. } => {
                    ctx.document.creations.push(creation);
                    Ok(())
                }
                other => Err(misplaced(element, Some(other.name()))),
            }),
        );

        registry
            .add(
                format!("{}/description", pattern),
                FnRule::on_begin(|ctx, element| {
                    creation_mut(ctx, element)?.description = Some(text(element));
                    Ok(())
                }),
            )
            .add(
                format!("{}/source", pattern),
                FnRule::on_begin(|ctx, element| {
                    creation_mut(ctx, element)?.source = Some(text(element));
                    Ok(())
                }),
            )
            .add(
                format!("{}/invocation", pattern),
                FnRule::on_begin(|ctx, element| {
                    let invocation = CreationInvocation {
                        signature: required(element, "signature")?,
                        arguments: text(element),
                    };
                    creation_mut(ctx, element)?.invocations.push(invocation);
                    Ok(())
                }),
            )
            .add(
                format!("{}/parameter", pattern),
                FnRule::on_begin(|ctx, element| {
                    let name = required(element, "name")?;
                    creation_mut(ctx, element)?.parameters.insert(name, text(element));
                    Ok(())
                }),
            )
            .add(
                format!("{}/tag", pattern),
                FnRule::on_begin(|ctx, element| {
                    let name = required(element, "name")?;
                    let value = required(element, "value")?;
                    creation_mut(ctx, element)?.tags.insert(name, value);
                    Ok(())
                }),
            )
            .add(
                format!("{}/typeParameters/typeParameter", pattern),
                FnRule::on_begin(|ctx, element| {
                    let parameter = CreationTypeParameter {
                        name: required(element, "name")?,
                        type_name: required(element, "type")?,
                        title: optional(element, "title"),
                    };
                    creation_mut(ctx, element)?.type_parameters.push(parameter);
                    Ok(())
                }),
            );
    }
}

fn register_morphing(registry: &mut RuleRegistry) {
    registry
        .add(
            "component/morphTargets",
            FnRule::on_begin(|ctx, _| {
                ctx.push(Frame::MorphTargets(MorphTargets::default()));
                Ok(())
            })
            .and_end(|ctx, element| match ctx.pop(element)? {
                Frame::MorphTargets(targets) => {
                    ctx.document.morph_targets = Some(targets);
                    Ok(())
                }
                other => Err(misplaced(element, Some(other.name()))),
            }),
        )
        .add(
            "component/morphTargets/noInherit",
            FnRule::on_begin(|ctx, element| match ctx.top_mut() {
                Some(Frame::MorphTargets(targets)) => {
                    targets.no_inherit = true;
                    Ok(())
                }
                other => Err(misplaced(element, other.map(|f| f.name()))),
            }),
        )
        .add(
            "component/morphTargets/morphTarget",
            FnRule::on_begin(|ctx, element| {
                let target = MorphingTargetDescription {
                    class_name: required(element, "class")?,
                    creation_id: optional(element, "creationId"),
                };
                match ctx.top_mut() {
                    Some(Frame::MorphTargets(targets)) => {
                        targets.targets.push(target);
                        Ok(())
                    }
                    other => Err(misplaced(element, other.map(|f| f.name()))),
                }
            }),
        );
}

fn register_properties(registry: &mut RuleRegistry) {
    registry
        .add(
            "component/standard-bean-properties",
            FnRule::on_begin(|ctx, _| {
                ctx.document.standard_bean_properties = true;
                Ok(())
            }),
        )
        .add(
            "component/public-field-properties",
            FnRule::on_begin(|ctx, _| {
                ctx.document.public_field_properties = true;
                Ok(())
            }),
        )
        .add(
            "component/properties-noDefaultValue",
            FnRule::on_begin(|ctx, element| {
                let names = names(element)?;
                ctx.document.no_default_value.extend(names);
                Ok(())
            }),
        )
        .add(
            "component/property-tag",
            FnRule::on_begin(|ctx, element| {
                let declaration = PropertyTagDeclaration {
                    properties: names(element)?,
                    name: required(element, "name")?,
                    value: required(element, "value")?,
                };
                ctx.document.property_tags.push(declaration);
                Ok(())
            }),
        );

    for &(pattern, category) in CATEGORY_PATTERNS {
        registry.add(
            pattern,
            FnRule::on_begin(move |ctx, element| {
                let names = names(element)?;
                ctx.document.categories.push((category, names));
                Ok(())
            }),
        );
    }

    for (pattern, single) in [
        ("component/method-single-property", true),
        ("component/method-property", false),
    ] {
        registry.add(
            pattern,
            FnRule::on_begin(move |ctx, element| {
                ctx.push(Frame::MethodProperty(MethodPropertyDeclaration {
                    title: required(element, "title")?,
                    method: required(element, "method")?,
                    single,
                    configuration: None,
                }));
                Ok(())
            })
            .and_end(|ctx, element| match ctx.pop(element)? {
                Frame::MethodProperty(declaration) => {
                    ctx.document.method_properties.push(declaration);
                    Ok(())
                }
                other => Err(misplaced(element, Some(other.name()))),
            }),
        );
    }

    registry.add(
        "component/property",
        FnRule::on_begin(|ctx, element| {
            ctx.push(Frame::Property(PropertyConfiguration::new(required(element, "id")?)));
            Ok(())
        })
        .and_end(|ctx, element| match ctx.pop(element)? {
            Frame::Property(configuration) => {
                ctx.document.properties.push(configuration);
                Ok(())
            }
            other => Err(misplaced(element, Some(other.name()))),
        }),
    );

    for &pattern in CONFIGURATION_PATTERNS {
        registry
            .add(
                format!("{}/category", pattern),
                FnRule::on_begin(|ctx, element| {
                    let category = required(element, "value")?
                        .parse::<PropertyCategory>()
                        .map_err(DescriptionError::load)?;
                    ctx.configuration_mut(element)?.category = Some(category);
                    Ok(())
                }),
            )
            .add(
                format!("{}/defaultValue", pattern),
                FnRule::on_begin(|ctx, element| {
                    let value = required(element, "value")?;
                    ctx.configuration_mut(element)?.default_value = Some(value);
                    Ok(())
                }),
            )
            .add(
                format!("{}/getter", pattern),
                FnRule::on_begin(|ctx, element| {
                    let getter = required(element, "name")?;
                    ctx.configuration_mut(element)?.getter = Some(getter);
                    Ok(())
                }),
            )
            .add(
                format!("{}/tag", pattern),
                FnRule::on_begin(|ctx, element| {
                    let name = required(element, "name")?;
                    let value = required(element, "value")?;
                    ctx.configuration_mut(element)?.tags.insert(name, value);
                    Ok(())
                }),
            );
    }

    registry.add(
        "component/add-property",
        FnRule::on_begin(|ctx, element| {
            let mut property = PropertyDescription::new(
                required(element, "id")?,
                required(element, "title")?,
                PropertyKind::Configurable,
            );
            property.type_name = optional(element, "type");
            if let Some(category) = optional(element, "category") {
                property.category = category.parse().map_err(DescriptionError::load)?;
            }
            ctx.push(Frame::ConfigurableProperty(property));
            Ok(())
        })
        .and_end(|ctx, element| match ctx.pop(element)? {
            Frame::ConfigurableProperty(property) => {
                ctx.document.configurable_properties.push(property);
                Ok(())
            }
            other => Err(misplaced(element, Some(other.name()))),
        }),
    );
}

fn register_invocations(registry: &mut RuleRegistry) {
    registry
        .add(
            "component/constructors/constructor",
            FnRule::on_begin(|ctx, _| {
                ctx.push(Frame::Constructor(ConstructorDeclaration::default()));
                Ok(())
            })
            .and_end(|ctx, element| match ctx.pop(element)? {
                Frame::Constructor(constructor) => {
                    ctx.document.constructors.push(constructor);
                    Ok(())
                }
                other => Err(misplaced(element, Some(other.name()))),
            }),
        )
        .add(
            "component/methods/method",
            FnRule::on_begin(|ctx, element| {
                let order = match element.attributes.get("order") {
                    Some(_) => Some(method_order(element)?),
                    None => None,
                };
                ctx.push(Frame::Method(MethodDeclaration {
                    name: required(element, "name")?,
                    order,
                    ..MethodDeclaration::default()
                }));
                Ok(())
            })
            .and_end(|ctx, element| match ctx.pop(element)? {
                Frame::Method(method) => {
                    ctx.document.methods.push(method);
                    Ok(())
                }
                other => Err(misplaced(element, Some(other.name()))),
            }),
        )
        .add(
            "component/methods/method/tag",
            FnRule::on_begin(|ctx, element| {
                let name = required(element, "name")?;
                let value = required(element, "value")?;
                match ctx.top_mut() {
                    Some(Frame::Method(method)) => {
                        method.tags.insert(name, value);
                        Ok(())
                    }
                    other => Err(misplaced(element, other.map(|f| f.name()))),
                }
            }),
        );

    for (pattern, include) in [
        ("component/methods/methods-include", true),
        ("component/methods/methods-exclude", false),
    ] {
        registry.add(
            pattern,
            FnRule::on_begin(move |ctx, element| {
                let signature = required(element, "signature")?;
                ctx.document
                    .method_operations
                    .push(MethodOperation { include, signature });
                Ok(())
            }),
        );
    }

    for &pattern in INVOCATION_PATTERNS {
        registry
            .add(
                format!("{}/parameter", pattern),
                FnRule::on_begin(|ctx, element| {
                    let index = match ctx.top_mut() {
                        Some(Frame::Constructor(constructor)) => constructor.parameters.len(),
                        Some(Frame::Method(method)) => method.parameters.len(),
                        other => return Err(misplaced(element, other.map(|f| f.name()))),
                    };
                    let mut parameter = ParameterDescription::new(index, required(element, "type")?);
                    parameter.name = optional(element, "name");
                    parameter.default_source = optional(element, "defaultSource");
                    parameter.property = optional(element, "property");
                    parameter.parent = flag(element, "parent")?;
                    parameter.child = flag(element, "child")?;
                    parameter.parent2 = flag(element, "parent2")?;
                    parameter.child2 = flag(element, "child2")?;
                    ctx.push(Frame::Parameter(parameter));
                    Ok(())
                })
                .and_end(|ctx, element| {
                    let parameter = match ctx.pop(element)? {
                        Frame::Parameter(parameter) => parameter,
                        other => return Err(misplaced(element, Some(other.name()))),
                    };
                    match ctx.top_mut() {
                        Some(Frame::Constructor(constructor)) => constructor.parameters.push(parameter),
                        Some(Frame::Method(method)) => method.parameters.push(parameter),
                        other => return Err(misplaced(element, other.map(|f| f.name()))),
                    }
                    Ok(())
                }),
            )
            .add(
                format!("{}/parameter/tag", pattern),
                FnRule::on_begin(|ctx, element| {
                    let name = required(element, "name")?;
                    let value = required(element, "value")?;
                    match ctx.top_mut() {
                        Some(Frame::Parameter(parameter)) => {
                            parameter.tags.insert(name, value);
                            Ok(())
                        }
                        other => Err(misplaced(element, other.map(|f| f.name()))),
                    }
                }),
            );
    }
}

fn register_method_order(registry: &mut RuleRegistry) {
    registry
        .add(
            "component/method-order/default",
            FnRule::on_begin(|ctx, element| {
                ctx.document.method_order.default = Some(method_order(element)?);
                Ok(())
            }),
        )
        .add(
            "component/method-order/method",
            FnRule::on_begin(|ctx, element| {
                let signature = required(element, "signature")?;
                let order = method_order(element)?;
                ctx.document.method_order.methods.push((signature, order));
                Ok(())
            }),
        )
        .add(
            "component/method-order/methods",
            FnRule::on_begin(|ctx, element| {
                ctx.push(Frame::MethodOrderGroup(method_order(element)?));
                Ok(())
            })
            .and_end(|ctx, element| match ctx.pop(element)? {
                Frame::MethodOrderGroup(_) => Ok(()),
                other => Err(misplaced(element, Some(other.name()))),
            }),
        )
        .add(
            "component/method-order/methods/s",
            FnRule::on_begin(|ctx, element| {
                let order = match ctx.top_mut() {
                    Some(Frame::MethodOrderGroup(order)) => *order,
                    other => return Err(misplaced(element, other.map(|f| f.name()))),
                };
                ctx.document.method_order.methods.push((text(element), order));
                Ok(())
            }),
        );
}

fn register_editors(registry: &mut RuleRegistry) {
    let editor_patterns = CONFIGURATION_PATTERNS
        .iter()
        .map(|p| format!("{}/editor", p))
        .chain(INVOCATION_PATTERNS.iter().map(|p| format!("{}/parameter/editor", p)));

    for pattern in editor_patterns {
        registry.add(
            pattern,
            FnRule::on_begin(|ctx, element| {
                ctx.push(Frame::Editor(EditorDescription::new(required(element, "id")?)));
                Ok(())
            })
            .and_end(|ctx, element| {
                let editor = match ctx.pop(element)? {
                    Frame::Editor(editor) => editor,
                    other => return Err(misplaced(element, Some(other.name()))),
                };
                if let Some(Frame::Parameter(parameter)) = ctx.top_mut() {
                    parameter.editor = Some(editor);
                    return Ok(());
                }
                ctx.configuration_mut(element)?.editor = Some(editor);
                Ok(())
            }),
        );
    }

    for pattern in ["*/editor/parameter", "component/add-property/parameter"] {
        registry.add(
            pattern,
            FnRule::on_begin(|ctx, element| {
                let name = required(element, "name")?;
                editor_parameters_mut(ctx, element)?
                    .values
                    .insert(name, text(element));
                Ok(())
            }),
        );
    }

    for pattern in ["*/editor/parameter-list", "component/add-property/parameter-list"] {
        registry.add(
            pattern,
            FnRule::on_begin(|ctx, element| {
                let name = required(element, "name")?;
                editor_parameters_mut(ctx, element)?
                    .lists
                    .entry(name)
                    .or_default()
                    .push(text(element));
                Ok(())
            }),
        );
    }
}
