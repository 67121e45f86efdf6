//! Extension field collection and registration.
//!
//! Extension fields are collected while messages are compiled and emitted
//! once per file, after every enum and message declaration, since the
//! extended types must exist before fields can be registered on them.

use super::fields::encode_field_named;
use super::namespace::NamespaceResolver;
use crate::error::CodegenError;
use indexmap::IndexMap;
use protojson_schema::FieldDescriptor;

/// Extension fields of one file, grouped by extendee.
///
/// Extendees keep first-encounter order, and fields keep encounter order
/// within an extendee.
#[derive(Debug, Default)]
pub struct ExtensionGroup<'a> {
    groups: IndexMap<&'a str, Vec<(String, &'a FieldDescriptor)>>,
}

impl<'a> ExtensionGroup<'a> {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an extension field declared in `namespace`.
    pub fn record(&mut self, namespace: &str, field: &'a FieldDescriptor) {
        let extendee = field.extendee.as_deref().unwrap_or_default();
        self.groups
            .entry(extendee)
            .or_default()
            .push((namespace.to_string(), field));
    }

    /// Records every field of `fields` as declared in `namespace`.
    pub fn record_all(&mut self, namespace: &str, fields: &'a [FieldDescriptor]) {
        for field in fields {
            self.record(namespace, field);
        }
    }

    /// Returns the number of recorded fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Returns true if no field was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates over extendees in first-encounter order.
    pub fn extendees(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().copied()
    }

    /// Generates every registration, consuming the group.
    ///
    /// # Errors
    /// Returns [`CodegenError::UnqualifiedReference`] if an extendee or a
    /// field type reference lacks the leading dot.
    pub fn emit(
        self,
        runtime: &str,
        resolver: &mut NamespaceResolver<'_>,
    ) -> Result<String, CodegenError> {
        let mut output = String::new();
        for (_, fields) in self.groups {
            for (namespace, field) in fields {
                output.push_str(&compile_extension(field, &namespace, "", runtime, resolver)?);
            }
        }
        Ok(output)
    }
}

/// Generates one extension registration.
///
/// The field name is qualified by `namespace` in the metadata, since the
/// field has no owning type in the output.
///
/// # Errors
/// Returns [`CodegenError::UnqualifiedReference`] if the extendee or the field
/// type reference lacks the leading dot.
pub fn compile_extension(
    field: &FieldDescriptor,
    namespace: &str,
    indent: &str,
    runtime: &str,
    resolver: &mut NamespaceResolver<'_>,
) -> Result<String, CodegenError> {
    let extendee = field.extendee.as_deref().unwrap_or_default();
    let target = resolver.resolve_type_ref(extendee, || {
        format!("extendee of extension field '{}'", field.name)
    })?;

    let name = if namespace.is_empty() {
        field.name.clone()
    } else {
        format!("{namespace}.{}", field.name)
    };
    let metadata = encode_field_named(field, &name, resolver)?;

    let lines = [
        format!("{runtime}.extend({target}, {{"),
        format!("  {}: {metadata}", field.number),
        "});".to_string(),
    ];

    let mut output = String::new();
    for line in &lines {
        output.push_str(indent);
        output.push_str(line);
        output.push('\n');
    }
    output.push('\n');
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::js::namespace::PackageRegistry;
    use protojson_schema::FieldType;

    fn registry() -> PackageRegistry {
        let mut registry = PackageRegistry::new();
        registry.register("pkg", "pkg");
        registry
    }

    #[test]
    fn test_compile_extension() {
        let registry = registry();
        let mut resolver = NamespaceResolver::new(&registry);
        let field = FieldDescriptor::optional("note", 100, FieldType::String).extending(".pkg.Base");

        let output = compile_extension(&field, "pkg.Holder", "", "ProtoJson", &mut resolver)
            .expect("extension");
        assert_eq!(
            output,
            "ProtoJson.extend(pkg.Base, {\n  100: ['pkg.Holder.note', 1, 9, null, null, {}]\n});\n\n"
        );
    }

    #[test]
    fn test_compile_extension_indent() {
        let registry = registry();
        let mut resolver = NamespaceResolver::new(&registry);
        let field = FieldDescriptor::repeated("ids", 200, FieldType::Int64).extending(".pkg.Base");

        let output =
            compile_extension(&field, "", "    ", "PJ", &mut resolver).expect("extension");
        assert_eq!(
            output,
            "    PJ.extend(pkg.Base, {\n      200: ['ids', 3, 3, null, null, {}]\n    });\n\n"
        );
    }

    #[test]
    fn test_compile_extension_unqualified_extendee() {
        let registry = registry();
        let mut resolver = NamespaceResolver::new(&registry);
        let field = FieldDescriptor::optional("note", 100, FieldType::String).extending("Base");

        let err = compile_extension(&field, "pkg", "", "ProtoJson", &mut resolver)
            .expect_err("unqualified extendee");
        assert!(matches!(err, CodegenError::UnqualifiedReference { .. }));
    }

    #[test]
    fn test_group_order() {
        let a1 = FieldDescriptor::optional("a1", 100, FieldType::Int32).extending(".pkg.A");
        let b1 = FieldDescriptor::optional("b1", 100, FieldType::Int32).extending(".pkg.B");
        let a2 = FieldDescriptor::optional("a2", 101, FieldType::Int32).extending(".pkg.A");

        let mut group = ExtensionGroup::new();
        assert!(group.is_empty());
        group.record("pkg.X", &a1);
        group.record("pkg", &b1);
        group.record("pkg.Y", &a2);

        assert_eq!(group.len(), 3);
        assert_eq!(group.extendees().collect::<Vec<_>>(), vec![".pkg.A", ".pkg.B"]);

        let registry = registry();
        let mut resolver = NamespaceResolver::new(&registry);
        let output = group.emit("ProtoJson", &mut resolver).expect("emit");

        let first = output.find("'pkg.X.a1'").unwrap();
        let second = output.find("'pkg.Y.a2'").unwrap();
        let third = output.find("'pkg.b1'").unwrap();
        assert!(first < second && second < third);
        assert_eq!(output.matches("ProtoJson.extend(pkg.A, {").count(), 2);
        assert_eq!(output.matches("ProtoJson.extend(").count(), 3);
    }
}
