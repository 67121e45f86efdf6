//! Field metadata literals consumed by the runtime.
//!
//! Every field is described by a six-element array:
//!
//! ```text
//! ['name', label, type, 'reference' | null, default, {}]
//! ```
//!
//! The runtime reads the elements by position.

use super::namespace::NamespaceResolver;
use super::types::{render_default, type_reference};
use crate::error::CodegenError;
use protojson_schema::FieldDescriptor;

/// Number of elements in a field metadata literal.
pub const FIELD_METADATA_LEN: usize = 6;

/// Encodes a field's metadata literal under its declared name.
///
/// # Errors
/// Returns [`CodegenError::UnqualifiedReference`] if the field's type
/// reference lacks the leading dot.
pub fn encode_field(
    field: &FieldDescriptor,
    resolver: &mut NamespaceResolver<'_>,
) -> Result<String, CodegenError> {
    encode_field_named(field, &field.name, resolver)
}

/// Encodes a field's metadata literal under `name`.
///
/// # Errors
/// Returns [`CodegenError::UnqualifiedReference`] if the field's type
/// reference lacks the leading dot.
pub fn encode_field_named(
    field: &FieldDescriptor,
    name: &str,
    resolver: &mut NamespaceResolver<'_>,
) -> Result<String, CodegenError> {
    let reference = match type_reference(field, resolver)? {
        Some(reference) => format!("'{reference}'"),
        None => "null".to_string(),
    };
    let default = render_default(field, resolver)?;

    let elements: [String; FIELD_METADATA_LEN] = [
        format!("'{name}'"),
        field.label.code().to_string(),
        field.field_type.code().to_string(),
        reference,
        default,
        "{}".to_string(),
    ];

    Ok(format!("[{}]", elements.join(", ")))
}
