//! Documentation types and default value literals.

use super::namespace::NamespaceResolver;
use crate::error::CodegenError;
use protojson_schema::{FieldDescriptor, FieldType};

/// Sentinel documentation type for groups.
pub const UNKNOWN_TYPE: &str = "unknown";

/// Resolves the field's type reference, if it has one.
///
/// # Errors
/// Returns [`CodegenError::UnqualifiedReference`] for a reference without the
/// leading dot.
pub fn type_reference(
    field: &FieldDescriptor,
    resolver: &mut NamespaceResolver<'_>,
) -> Result<Option<String>, CodegenError> {
    field
        .type_name
        .as_deref()
        .map(|type_name| {
            resolver.resolve_type_ref(type_name, || format!("type of field '{}'", field.name))
        })
        .transpose()
}

/// Returns the JSDoc type of a field's values.
///
/// # Errors
/// Returns [`CodegenError::UnqualifiedReference`] for message and enum fields
/// whose reference lacks the leading dot.
pub fn display_type(
    field: &FieldDescriptor,
    resolver: &mut NamespaceResolver<'_>,
) -> Result<String, CodegenError> {
    let field_type = field.field_type;
    let display = if field_type.is_float() {
        "Float".to_string()
    } else if field_type.is_integer() {
        "Int".to_string()
    } else {
        match field_type {
            FieldType::Bool => "Boolean".to_string(),
            FieldType::String | FieldType::Bytes => "String".to_string(),
            FieldType::Message => type_reference(field, resolver)?
                .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
            FieldType::Enum => match type_reference(field, resolver)? {
                Some(reference) => format!("Int ({reference})"),
                None => "Int".to_string(),
            },
            _ => UNKNOWN_TYPE.to_string(),
        }
    };
    Ok(display)
}

/// Renders a field's default value as a JavaScript literal.
///
/// Fields without a default render `null`. Only string fields produce a
/// quoted literal; numbers and bytes pass through verbatim.
///
/// # Errors
/// Returns [`CodegenError::UnqualifiedReference`] for an enum default whose
/// type reference lacks the leading dot.
pub fn render_default(
    field: &FieldDescriptor,
    resolver: &mut NamespaceResolver<'_>,
) -> Result<String, CodegenError> {
    let Some(value) = field.default_value.as_deref() else {
        return Ok("null".to_string());
    };

    let literal = match field.field_type {
        FieldType::Bool => {
            if value.eq_ignore_ascii_case("true") {
                "true".to_string()
            } else {
                "false".to_string()
            }
        }
        FieldType::String => format!("\"{}\"", escape_string(value)),
        FieldType::Enum => match type_reference(field, resolver)? {
            Some(reference) => format!("{reference}.{value}"),
            None => value.to_string(),
        },
        _ => value.to_string(),
    };
    Ok(literal)
}

/// Backslash-escapes double quotes and backslashes, nothing else.
#[must_use]
pub fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
