//! Descriptor validation utilities.
//!
//! This module checks the structural shape of a descriptor tree before code
//! generation walks it.

use crate::error::SchemaError;
use crate::messages::{FieldDescriptor, MessageType};
use crate::types::{EnumType, SchemaFile};
use std::collections::{HashMap, HashSet};

/// Validates a schema file for structural correctness.
///
/// # Arguments
/// * `file` - The schema file to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_file(file: &SchemaFile) -> Result<(), SchemaError> {
    let scope = file.package.as_str();

    for enum_type in &file.enums {
        validate_enum(scope, enum_type)?;
    }

    for msg in &file.messages {
        validate_message(scope, msg)?;
    }

    for field in &file.extensions {
        validate_extension(scope, field)?;
    }

    Ok(())
}

/// Validates an enum definition.
fn validate_enum(scope: &str, enum_type: &EnumType) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();

    for value in &enum_type.values {
        if !seen_names.insert(&value.name) {
            return Err(SchemaError::validation(format!(
                "Duplicate enum value name '{}' in enum '{}'",
                value.name,
                qualify(scope, &enum_type.name)
            )));
        }
    }

    Ok(())
}

/// Validates a message and everything declared inside it.
fn validate_message(scope: &str, msg: &MessageType) -> Result<(), SchemaError> {
    let msg_scope = qualify(scope, &msg.name);
    let mut numbers: HashMap<u32, &str> = HashMap::new();

    for field in &msg.fields {
        if field.is_extension() {
            return Err(SchemaError::validation(format!(
                "Field '{}' in '{}' names an extendee but is not declared as an extension",
                field.name, msg_scope
            )));
        }
        validate_field(&msg_scope, field)?;

        if let Some(first) = numbers.insert(field.number, &field.name) {
            return Err(SchemaError::DuplicateFieldNumber {
                scope: msg_scope,
                number: field.number,
                first: first.to_string(),
                second: field.name.clone(),
            });
        }
    }

    for enum_type in &msg.nested_enums {
        validate_enum(&msg_scope, enum_type)?;
    }

    for nested in &msg.nested_types {
        validate_message(&msg_scope, nested)?;
    }

    for field in &msg.extensions {
        validate_extension(&msg_scope, field)?;
    }

    Ok(())
}

/// Validates an extension field.
fn validate_extension(scope: &str, field: &FieldDescriptor) -> Result<(), SchemaError> {
    if !field.is_extension() {
        return Err(SchemaError::MissingExtendee {
            scope: scope.to_string(),
            field: field.name.clone(),
        });
    }
    validate_field(scope, field)
}

/// Validates a single field.
fn validate_field(scope: &str, field: &FieldDescriptor) -> Result<(), SchemaError> {
    if field.field_type.needs_type_name() && field.type_name.is_none() {
        return Err(SchemaError::MissingTypeName {
            scope: scope.to_string(),
            field: field.name.clone(),
            field_type: field.field_type.to_string(),
        });
    }
    Ok(())
}

fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}.{name}")
    }
}
