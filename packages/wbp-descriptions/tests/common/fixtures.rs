//! Metadata and class model fixtures

use wbp_descriptions::{ClassInfo, ClassPath};

/// `<component>` document wrapping `body`
pub fn component_xml(body: &str) -> String {
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<component>\n{body}\n</component>\n")
}

/// Document declaring only a model class
pub fn model_xml(model_class: &str) -> String {
    component_xml(&format!("<model class=\"{model_class}\"/>"))
}

/// Document declaring a toolkit and a model class
pub fn toolkit_xml(toolkit: &str, model_class: &str) -> String {
    component_xml(&format!(
        "<toolkit id=\"{toolkit}\"/>\n<model class=\"{model_class}\"/>"
    ))
}

/// Creation element with a source template
pub fn creation_xml(id: &str, source: &str) -> String {
    format!("<creation id=\"{id}\"><source>{source}</source></creation>")
}

/// `a/b/Button.wbp-component.xml` for `a.b.Button`
pub fn description_entry(class_name: &str) -> String {
    format!("{}.wbp-component.xml", class_name.replace('.', "/"))
}

/// Widget toolkit shaped class model:
///
/// ```text
/// java.lang.Object
/// └── a.Widget
///     ├── a.Control (implements a.IControl)
///     │   ├── a.Button (int)
///     │   └── a.Label ()
///     └── a.Shell
/// ```
pub fn widget_classes() -> ClassPath {
    ClassPath::new()
        .with_class(ClassInfo::interface("a.IControl"))
        .with_class(ClassInfo::new("a.Widget").with_constructor(&[]))
        .with_class(
            ClassInfo::new("a.Control")
                .extends("a.Widget")
                .implements("a.IControl")
                .with_constructor(&["a.Composite", "int"]),
        )
        .with_class(
            ClassInfo::new("a.Button")
                .extends("a.Control")
                .with_constructor(&["int"])
                .with_method("setText", &["java.lang.String"], "void")
                .with_method("getText", &[], "java.lang.String"),
        )
        .with_class(ClassInfo::new("a.Label").extends("a.Control").with_constructor(&[]))
        .with_class(
            ClassInfo::new("a.Shell")
                .extends("a.Widget")
                .with_method("setContent", &["a.Button"], "void")
                .with_method("getContent", &[], "a.Button"),
        )
        .with_class(ClassInfo::new("a.Factory"))
        .with_class(ClassInfo::new("a.Composite").extends("a.Widget"))
}
