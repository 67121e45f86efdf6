//! Message definitions for schema files.
//!
//! This module contains the data structures representing message descriptors,
//! including their fields, nested types and extension fields.

use crate::types::{EnumType, FieldLabel, FieldType};
use serde::{Deserialize, Serialize};

/// Message definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageType {
    /// Message name, unqualified.
    pub name: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    /// Messages declared inside this message.
    #[serde(default)]
    pub nested_types: Vec<MessageType>,
    /// Enums declared inside this message.
    #[serde(default)]
    pub nested_enums: Vec<EnumType>,
    /// Extension fields declared inside this message.
    #[serde(default)]
    pub extensions: Vec<FieldDescriptor>,
}

impl MessageType {
    /// Creates a new message definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a field to the message.
    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a nested message.
    #[must_use]
    pub fn with_nested_type(mut self, message: MessageType) -> Self {
        self.nested_types.push(message);
        self
    }

    /// Adds a nested enum.
    #[must_use]
    pub fn with_nested_enum(mut self, enum_type: EnumType) -> Self {
        self.nested_enums.push(enum_type);
        self
    }

    /// Adds an extension field declared in this message's scope.
    #[must_use]
    pub fn with_extension(mut self, field: FieldDescriptor) -> Self {
        self.extensions.push(field);
        self
    }

    /// Returns true if the message declares any extension fields.
    #[must_use]
    pub fn has_extensions(&self) -> bool {
        !self.extensions.is_empty()
    }
}

/// Field definition within a message, or an extension field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as declared.
    pub name: String,
    /// Field number (tag).
    pub number: u32,
    /// Cardinality.
    #[serde(default)]
    pub label: FieldLabel,
    /// Value type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Fully-qualified type reference for message, enum and group fields.
    #[serde(default)]
    pub type_name: Option<String>,
    /// Default value in schema text form.
    #[serde(default)]
    pub default_value: Option<String>,
    /// Fully-qualified target message, set only on extension fields.
    #[serde(default)]
    pub extendee: Option<String>,
}

impl FieldDescriptor {
    /// Creates a new field definition.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        number: u32,
        label: FieldLabel,
        field_type: FieldType,
    ) -> Self {
        Self {
            name: name.into(),
            number,
            label,
            field_type,
            type_name: None,
            default_value: None,
            extendee: None,
        }
    }

    /// Creates an optional field.
    #[must_use]
    pub fn optional(name: impl Into<String>, number: u32, field_type: FieldType) -> Self {
        Self::new(name, number, FieldLabel::Optional, field_type)
    }

    /// Creates a required field.
    #[must_use]
    pub fn required(name: impl Into<String>, number: u32, field_type: FieldType) -> Self {
        Self::new(name, number, FieldLabel::Required, field_type)
    }

    /// Creates a repeated field.
    #[must_use]
    pub fn repeated(name: impl Into<String>, number: u32, field_type: FieldType) -> Self {
        Self::new(name, number, FieldLabel::Repeated, field_type)
    }

    /// Sets the type reference.
    #[must_use]
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Marks the field as an extension of `extendee`.
    #[must_use]
    pub fn extending(mut self, extendee: impl Into<String>) -> Self {
        self.extendee = Some(extendee.into());
        self
    }

    /// Returns true if the field is repeated.
    #[must_use]
    pub fn is_repeated(&self) -> bool {
        self.label.is_repeated()
    }

    /// Returns true if this is an extension field.
    #[must_use]
    pub fn is_extension(&self) -> bool {
        self.extendee.is_some()
    }
}
