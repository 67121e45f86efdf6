//! Message constructor generation.

use super::accessors::generate_accessors;
use super::enums::compile_enum;
use super::extensions::ExtensionGroup;
use super::fields::encode_field;
use super::namespace::NamespaceResolver;
use crate::error::CodegenError;
use protojson_schema::MessageType;

/// Generates a message declared in `namespace`, and everything nested in it.
///
/// Emits the constructor registration, then, under the message's own
/// namespace: accessors for each field, nested enums, and nested messages
/// depth-first. Extension fields declared in the message are recorded into
/// `extensions` under the message's namespace, not emitted.
///
/// # Errors
/// Returns [`CodegenError::UnqualifiedReference`] if any field type reference
/// lacks the leading dot.
pub fn compile_message<'a>(
    msg: &'a MessageType,
    namespace: &str,
    runtime: &str,
    resolver: &mut NamespaceResolver<'_>,
    extensions: &mut ExtensionGroup<'a>,
) -> Result<String, CodegenError> {
    tracing::debug!(namespace, message = %msg.name, "compiling message");

    let mut output = String::new();

    output.push_str("/**\n");
    output.push_str(" * @constructor\n");
    output.push_str(&format!(" * @augments {{{runtime}.Message}}\n"));
    output.push_str(&format!(" * @extends {runtime}.Message\n"));
    output.push_str(&format!(" * @memberOf {namespace}\n"));
    output.push_str(" * @param {object} data - Optional, provide initial data to parse\n");
    output.push_str(" */\n");
    output.push_str(&format!("{namespace}.{} = {runtime}.create({{\n", msg.name));
    output.push_str("  fields: {\n");
    let mut entries = Vec::with_capacity(msg.fields.len());
    for field in &msg.fields {
        entries.push(format!("    {}: {}", field.number, encode_field(field, resolver)?));
    }
    if !entries.is_empty() {
        output.push_str(&entries.join(",\n"));
        output.push('\n');
    }
    output.push_str("  },\n");
    // Extension ranges are not tracked by the runtime yet.
    output.push_str("  ranges: [\n");
    output.push_str("  ]\n");
    output.push_str("});\n\n");

    let namespace = format!("{namespace}.{}", msg.name);

    for field in &msg.fields {
        output.push_str(&generate_accessors(field, &namespace, resolver)?);
    }

    for enum_type in &msg.nested_enums {
        output.push_str(&compile_enum(enum_type, &namespace));
    }

    for nested in &msg.nested_types {
        output.push_str(&compile_message(nested, &namespace, runtime, resolver, extensions)?);
    }

    if msg.has_extensions() {
        tracing::debug!(%namespace, count = msg.extensions.len(), "recording extensions");
        extensions.record_all(&namespace, &msg.extensions);
    }

    Ok(output)
}
