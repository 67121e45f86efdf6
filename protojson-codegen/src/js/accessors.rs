//! Accessor method generation.
//!
//! Accessors are a veneer over the generic numbered-field operations of a
//! runtime message instance (`_has`, `_get`, `_set`, `_add`, `_clear`). They
//! hold no state of their own.

use super::namespace::NamespaceResolver;
use super::types::display_type;
use crate::error::CodegenError;
use protojson_schema::FieldDescriptor;

/// Accessor methods emitted for singular fields, in emission order.
pub const SINGULAR_ACCESSORS: [AccessorKind; 4] = [
    AccessorKind::Has,
    AccessorKind::Get,
    AccessorKind::Set,
    AccessorKind::Clear,
];

/// Accessor methods emitted for repeated fields, in emission order.
pub const REPEATED_ACCESSORS: [AccessorKind; 5] = [
    AccessorKind::Has,
    AccessorKind::GetItem,
    AccessorKind::GetList,
    AccessorKind::Add,
    AccessorKind::Clear,
];

/// Kinds of generated accessor methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    /// `hasX()`: presence check.
    Has,
    /// `getX()`: singular value lookup.
    Get,
    /// `getX(idx)`: indexed element lookup.
    GetItem,
    /// `getXList()`: whole sequence lookup.
    GetList,
    /// `setX(value)`: store, returns the instance.
    Set,
    /// `addX(value)`: append, returns the instance.
    Add,
    /// `clearX()`: removal, returns the instance.
    Clear,
}

impl AccessorKind {
    /// Returns the accessors emitted for `field`.
    #[must_use]
    pub fn for_field(field: &FieldDescriptor) -> &'static [AccessorKind] {
        if field.is_repeated() {
            &REPEATED_ACCESSORS
        } else {
            &SINGULAR_ACCESSORS
        }
    }

    /// Returns the method name for a field whose accessor suffix is `suffix`.
    #[must_use]
    pub fn method_name(&self, suffix: &str) -> String {
        match self {
            Self::Has => format!("has{suffix}"),
            Self::Get | Self::GetItem => format!("get{suffix}"),
            Self::GetList => format!("get{suffix}List"),
            Self::Set => format!("set{suffix}"),
            Self::Add => format!("add{suffix}"),
            Self::Clear => format!("clear{suffix}"),
        }
    }

    /// Renders one accessor method.
    fn render(&self, field: &FieldDescriptor, namespace: &str, doc_type: &str) -> String {
        let name = &field.name;
        let number = field.number;
        let method = self.method_name(&accessor_suffix(name));

        let (summary, params, returns, signature, body) = match self {
            Self::Has => (
                format!("Check <{name}> value"),
                None,
                "Boolean".to_string(),
                "",
                format!("this._has({number})"),
            ),
            Self::Get => (
                format!("Get <{name}> value"),
                None,
                doc_type.to_string(),
                "",
                format!("this._get({number})"),
            ),
            Self::GetItem => (
                format!("Get an item from <{name}>"),
                Some(("int".to_string(), "idx")),
                doc_type.to_string(),
                "idx",
                format!("this._get({number}, idx)"),
            ),
            Self::GetList => (
                format!("Get <{name}> value"),
                None,
                format!("{doc_type}[]"),
                "",
                format!("this._get({number})"),
            ),
            Self::Set => (
                format!("Set a value for <{name}>"),
                Some((doc_type.to_string(), "value")),
                namespace.to_string(),
                "value",
                format!("this._set({number}, value)"),
            ),
            Self::Add => (
                format!("Add a value to <{name}>"),
                Some((doc_type.to_string(), "value")),
                namespace.to_string(),
                "value",
                format!("this._add({number}, value)"),
            ),
            Self::Clear => (
                format!("Clear the value of <{name}>"),
                None,
                namespace.to_string(),
                "",
                format!("this._clear({number})"),
            ),
        };

        let mut output = String::new();
        output.push_str("/**\n");
        output.push_str(&format!(" * {summary}\n"));
        if let Some((param_type, param_name)) = params {
            output.push_str(&format!(" * @param {{{param_type}}} {param_name}\n"));
        }
        output.push_str(&format!(" * @return {{{returns}}}\n"));
        output.push_str(" */\n");
        output.push_str(&format!(
            "{namespace}.prototype.{method} = function({signature}){{\n"
        ));
        output.push_str(&format!("  return {body};\n"));
        output.push_str("};\n\n");
        output
    }
}

/// Derives the accessor suffix: the declared name with its first character
/// upper-cased. Underscores and other characters are kept as they are.
#[must_use]
pub fn accessor_suffix(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generates the accessor methods of one field on the type at `namespace`.
///
/// # Errors
/// Returns [`CodegenError::UnqualifiedReference`] if the field's type
/// reference lacks the leading dot.
pub fn generate_accessors(
    field: &FieldDescriptor,
    namespace: &str,
    resolver: &mut NamespaceResolver<'_>,
) -> Result<String, CodegenError> {
    let doc_type = display_type(field, resolver)?;

    Ok(AccessorKind::for_field(field)
        .iter()
        .map(|kind| kind.render(field, namespace, &doc_type))
        .collect())
}
