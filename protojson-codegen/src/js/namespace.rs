//! Output namespaces and type reference normalization.
//!
//! Schema packages map onto dotted JavaScript namespaces. The
//! [`PackageRegistry`] records that mapping for every file known to a
//! generation request, and [`NamespaceResolver`] rewrites fully-qualified type
//! references against it.

use crate::config::FileOptions;
use crate::error::CodegenError;
use indexmap::IndexSet;
use protojson_schema::SchemaFile;
use std::collections::BTreeMap;

/// Computes the output namespace of a schema file.
///
/// `json.namespace` wins over the legacy `json.package`, which wins over the
/// declared package. Leading and trailing dots are trimmed.
#[must_use]
pub fn resolve_namespace(file: &SchemaFile, options: &FileOptions) -> String {
    let namespace = options
        .namespace
        .as_deref()
        .or(options.legacy_package.as_deref())
        .unwrap_or(&file.package);

    namespace.trim_matches('.').to_string()
}

/// Package to namespace bindings known to a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRegistry {
    packages: BTreeMap<String, String>,
}

impl PackageRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry binding every file's package to its namespace.
    #[must_use]
    pub fn from_files<'a>(files: impl IntoIterator<Item = &'a SchemaFile>) -> Self {
        let mut registry = Self::new();
        for file in files {
            registry.register_file(file);
        }
        registry
    }

    /// Binds `package` to `namespace`, replacing any previous binding.
    ///
    /// Empty packages and empty namespaces are ignored.
    pub fn register(&mut self, package: impl Into<String>, namespace: impl Into<String>) {
        let package: String = package.into();
        let namespace: String = namespace.into();
        let package = package.trim_matches('.');
        if package.is_empty() || namespace.is_empty() {
            return;
        }
        self.packages.insert(package.to_string(), namespace);
    }

    /// Binds a file's package to its resolved namespace.
    pub fn register_file(&mut self, file: &SchemaFile) {
        let namespace = resolve_namespace(file, &FileOptions::from_file(file));
        self.register(file.package.clone(), namespace);
    }

    /// Returns true if `package` is bound.
    #[must_use]
    pub fn contains(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }

    /// Returns the namespace bound to `package`.
    #[must_use]
    pub fn get(&self, package: &str) -> Option<&str> {
        self.packages.get(package).map(String::as_str)
    }

    /// Returns the number of bound packages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns true if no package is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Iterates over `(package, namespace)` bindings in package order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.packages
            .iter()
            .map(|(package, namespace)| (package.as_str(), namespace.as_str()))
    }

    /// Finds the longest bound package that is a dotted prefix of `reference`.
    ///
    /// Scans every binding once.
    #[must_use]
    pub fn longest_prefix(&self, reference: &str) -> Option<(&str, &str)> {
        self.iter()
            .filter(|(package, _)| {
                reference.len() > package.len()
                    && reference.starts_with(package)
                    && reference.as_bytes()[package.len()] == b'.'
            })
            .max_by_key(|(package, _)| package.len())
    }

    /// Returns true if `reference` is a bound namespace or lies below one.
    #[must_use]
    pub fn is_in_namespace(&self, reference: &str) -> bool {
        self.packages.values().any(|namespace| {
            reference == namespace.as_str()
                || (reference.len() > namespace.len()
                    && reference.starts_with(namespace.as_str())
                    && reference.as_bytes()[namespace.len()] == b'.')
        })
    }
}

/// Rewrites type references for one file compilation.
///
/// Unresolvable packages are collected as warnings instead of failing.
#[derive(Debug)]
pub struct NamespaceResolver<'r> {
    registry: &'r PackageRegistry,
    warnings: IndexSet<String>,
}

impl<'r> NamespaceResolver<'r> {
    /// Creates a resolver over `registry`.
    #[must_use]
    pub fn new(registry: &'r PackageRegistry) -> Self {
        Self {
            registry,
            warnings: IndexSet::new(),
        }
    }

    /// Normalizes a type reference into its output namespace form.
    ///
    /// An exact package match is substituted wholesale; otherwise the longest
    /// bound package prefix is swapped for its namespace and the remainder
    /// kept. References already in output form come back unchanged. References
    /// under no known package come back unchanged, minus the leading dot, and
    /// raise a warning.
    pub fn normalize_reference(&mut self, reference: &str) -> String {
        let reference = reference.trim_start_matches('.');

        if let Some(namespace) = self.registry.get(reference) {
            return namespace.to_string();
        }

        match self.registry.longest_prefix(reference) {
            Some((package, namespace)) => format!("{namespace}{}", &reference[package.len()..]),
            None if self.registry.is_in_namespace(reference) => reference.to_string(),
            None => {
                let message = format!("Non tracked package name found \"{reference}\"");
                if !self.warnings.contains(&message) {
                    tracing::warn!(reference, "unresolved type reference package");
                    self.warnings.insert(message);
                }
                reference.to_string()
            }
        }
    }

    /// Checks that `reference` is fully qualified, then normalizes it.
    ///
    /// # Errors
    /// Returns [`CodegenError::UnqualifiedReference`] if `reference` lacks the
    /// leading dot.
    pub fn resolve_type_ref(
        &mut self,
        reference: &str,
        context: impl FnOnce() -> String,
    ) -> Result<String, CodegenError> {
        if !reference.starts_with('.') {
            return Err(CodegenError::unqualified(reference, context()));
        }
        Ok(self.normalize_reference(reference))
    }

    /// Returns the warnings raised so far, in first-raised order.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.iter().cloned().collect()
    }

    /// Consumes the resolver, returning its warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings.into_iter().collect()
    }
}
