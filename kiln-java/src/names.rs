//! Validation utilities for Java identifiers and package names.

/// Java reserved words that cannot be used as identifiers.
/// Includes the literals `true`, `false` and `null`.
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "_", "true", "false", "null",
];

/// Contextual keywords that are legal identifiers but cannot name a type.
const RESTRICTED_TYPE_NAMES: &[&str] = &["permits", "record", "sealed", "var", "yield"];

/// Check if a name is a Java reserved word.
pub fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Validate that a name is a usable Java identifier.
/// Returns None if valid, Some(reason) if invalid.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, underscore or dollar sign"),
    }

    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return Some("name must contain only letters, digits, underscores and dollar signs");
    }

    if is_java_keyword(name) {
        return Some("name is a Java reserved word");
    }

    None
}

/// Validate the simple name of a class, interface, enum or annotation type.
pub fn validate_type_name(name: &str) -> Option<&'static str> {
    validate_identifier(name).or_else(|| {
        RESTRICTED_TYPE_NAMES
            .contains(&name)
            .then_some("name is restricted and cannot be used for a type")
    })
}

/// Validate a dotted package name. The empty package is the default namespace.
/// Returns None if valid, Some(reason) if invalid.
pub fn validate_package(package: &str) -> Option<&'static str> {
    if package.is_empty() {
        return None;
    }
    package
        .split('.')
        .find_map(validate_identifier)
        .map(|_| "package segments must be valid identifiers")
}

/// Join a package and a simple name, omitting the dot for the default package.
pub fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{package}.{name}")
    }
}
