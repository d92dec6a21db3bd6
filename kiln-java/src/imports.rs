//! Import collection for rendered compilation units.

use std::collections::BTreeMap;

use crate::types::ClassType;

/// The namespace every compilation unit sees without an import.
pub const IMPLICIT_PACKAGE: &str = "java.lang";

/// Tracks the classes referenced while rendering and deduplicates them.
///
/// Entries are keyed by fully-qualified name, so iteration order is the
/// lexicographic order of the names regardless of registration order.
///
/// # Example
///
/// ```
/// use kiln_java::{ClassType, ImportSet};
///
/// let mut imports = ImportSet::new();
/// imports.add(&ClassType::new("java.util", "List"));
/// imports.add(&ClassType::new("java.lang", "String"));
/// imports.add(&ClassType::new("com.acme", "Widget"));
///
/// assert_eq!(imports.lines("com.acme"), vec!["import java.util.List;"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    /// Fully-qualified name -> package
    imports: BTreeMap<String, String>,
}

impl ImportSet {
    /// Create a new empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class. Generic arguments are not part of an import.
    pub fn add(&mut self, ty: &ClassType) {
        self.imports
            .entry(ty.fully_qualified_name())
            .or_insert_with(|| ty.package().to_string());
    }

    /// Merge another set into this one.
    pub fn merge(&mut self, other: &ImportSet) {
        for (fqn, package) in &other.imports {
            self.imports
                .entry(fqn.clone())
                .or_insert_with(|| package.clone());
        }
    }

    /// Check if a fully-qualified name has been registered.
    pub fn contains(&self, fqn: &str) -> bool {
        self.imports.contains_key(fqn)
    }

    /// Iterate over every registered name in sorted order, including the
    /// ones that would be excluded from the header.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.imports.keys().map(String::as_str)
    }

    /// Whether a class in `package` needs an import when referenced from
    /// a unit in `current_package`.
    pub fn requires_import(package: &str, current_package: &str) -> bool {
        !package.is_empty() && package != current_package && package != IMPLICIT_PACKAGE
    }

    /// Render the `import` statements needed by a unit in `current_package`.
    ///
    /// Simple-name clashes are not resolved: `java.util.List` and
    /// `java.awt.List` are both imported and both render as `List`, which
    /// the Java compiler rejects. Callers referencing two classes with the
    /// same simple name must avoid one of them.
    pub fn lines(&self, current_package: &str) -> Vec<String> {
        self.imports
            .iter()
            .filter(|(_, package)| Self::requires_import(package, current_package))
            .map(|(fqn, _)| format!("import {fqn};"))
            .collect()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of registered classes.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

impl Extend<ClassType> for ImportSet {
    fn extend<I: IntoIterator<Item = ClassType>>(&mut self, iter: I) {
        for ty in iter {
            self.add(&ty);
        }
    }
}
