//! Error types for descriptor validation.

use thiserror::Error;

/// Error type for descriptor decoding and validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Label code outside the known range.
    #[error("unknown field label code {code}")]
    UnknownLabel {
        /// Raw label code.
        code: i32,
    },

    /// Type code outside the known range.
    #[error("unknown field type code {code}")]
    UnknownFieldType {
        /// Raw type code.
        code: i32,
    },

    /// Message, enum or group field without a type reference.
    #[error("field '{field}' in '{scope}' has type {field_type} but no type name")]
    MissingTypeName {
        /// Scope the field was declared in.
        scope: String,
        /// Field name.
        field: String,
        /// Declared field type.
        field_type: String,
    },

    /// Extension field without a target message.
    #[error("extension field '{field}' in '{scope}' has no extendee")]
    MissingExtendee {
        /// Scope the extension was declared in.
        scope: String,
        /// Field name.
        field: String,
    },

    /// Two fields of one message share a number.
    #[error("duplicate field number {number} in '{scope}' ('{first}' and '{second}')")]
    DuplicateFieldNumber {
        /// Message holding both fields.
        scope: String,
        /// Shared field number.
        number: u32,
        /// Name of the first field.
        first: String,
        /// Name of the second field.
        second: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl SchemaError {
    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
