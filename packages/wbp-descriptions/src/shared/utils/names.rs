//! Java name helpers
//!
//! Binary class names use `$` for nested classes (`a.b.Outer$Inner`),
//! canonical names use `.` (`a.b.Outer.Inner`).

/// Package of a binary class name, empty for the default package.
pub fn package_of(class_name: &str) -> &str {
    match class_name.rfind('.') {
        Some(index) => &class_name[..index],
        None => "",
    }
}

/// Simple name (after the last `.`), still containing `$` for nested classes.
pub fn short_name(class_name: &str) -> &str {
    match class_name.rfind('.') {
        Some(index) => &class_name[index + 1..],
        None => class_name,
    }
}

/// Source-level name of a binary class name.
pub fn canonical_name(class_name: &str) -> String {
    class_name.replace('$', ".")
}

/// Slash separated path of a class, as used for class-path resources.
pub fn class_resource_path(class_name: &str) -> String {
    class_name.replace('.', "/")
}

/// `setText(java.lang.String)` → `setText_java.lang.String_`
pub fn normalize_signature(signature: &str) -> String {
    signature
        .chars()
        .map(|c| match c {
            '(' | ',' | ')' => '_',
            c => c,
        })
        .collect()
}

/// Anonymous classes end with a numeric segment after `$` (`Outer$1`).
pub fn is_anonymous(class_name: &str) -> bool {
    match class_name.find('$') {
        Some(index) => {
            let inner = &class_name[index + 1..];
            !inner.is_empty() && inner.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

/// JavaBeans decapitalization: `Text` → `text`, `URL` → `URL`.
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if first.is_uppercase() && second.is_uppercase() => {
            name.to_string()
        }
        (Some(first), _) => first.to_lowercase().chain(name.chars().skip(1)).collect(),
        (None, _) => String::new(),
    }
}

/// `name(type1,type2)` for a member with the given parameter types.
pub fn member_signature(name: &str, parameter_types: &[String]) -> String {
    format!("{}({})", name, parameter_types.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_and_short_name() {
        assert_eq!(package_of("org.eclipse.swt.widgets.Button"), "org.eclipse.swt.widgets");
        assert_eq!(package_of("Foo"), "");
        assert_eq!(short_name("a.b.Outer$Inner"), "Outer$Inner");
    }

    #[test]
    fn test_canonical_name() {
        assert_eq!(canonical_name("a.b.Outer$Inner"), "a.b.Outer.Inner");
    }

    #[test]
    fn test_normalize_signature() {
        assert_eq!(
            normalize_signature("createButton(org.eclipse.swt.widgets.Composite,int)"),
            "createButton_org.eclipse.swt.widgets.Composite_int_"
        );
        assert_eq!(normalize_signature("create()"), "create__");
    }

    #[test]
    fn test_is_anonymous() {
        assert!(is_anonymous("a.Outer$1"));
        assert!(is_anonymous("a.Outer$12"));
        assert!(!is_anonymous("a.Outer$Inner"));
        assert!(!is_anonymous("a.Outer"));
        assert!(!is_anonymous("a.Outer$"));
    }

    #[test]
    fn test_decapitalize() {
        assert_eq!(decapitalize("Text"), "text");
        assert_eq!(decapitalize("URL"), "URL");
        assert_eq!(decapitalize("X"), "x");
        assert_eq!(decapitalize(""), "");
    }
}
