//! Schema type definitions.
//!
//! This module contains the data structures representing a single schema file,
//! its enums, and the label/type codes shared by every field.

use crate::error::SchemaError;
use crate::messages::{FieldDescriptor, MessageType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A single schema file, the unit of compilation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaFile {
    /// File name as given to the schema compiler (e.g. `proto/point.proto`).
    pub name: String,
    /// Package name; empty when the file declares none.
    #[serde(default)]
    pub package: String,
    /// Raw file options keyed by option name.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    /// Top-level enum definitions.
    #[serde(default)]
    pub enums: Vec<EnumType>,
    /// Top-level message definitions.
    #[serde(default)]
    pub messages: Vec<MessageType>,
    /// Top-level extension fields.
    #[serde(default)]
    pub extensions: Vec<FieldDescriptor>,
}

impl SchemaFile {
    /// Creates a new empty schema file.
    #[must_use]
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            ..Self::default()
        }
    }

    /// Sets a raw file option.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Adds a top-level enum.
    #[must_use]
    pub fn with_enum(mut self, enum_type: EnumType) -> Self {
        self.enums.push(enum_type);
        self
    }

    /// Adds a top-level message.
    #[must_use]
    pub fn with_message(mut self, message: MessageType) -> Self {
        self.messages.push(message);
        self
    }

    /// Adds a top-level extension field.
    #[must_use]
    pub fn with_extension(mut self, field: FieldDescriptor) -> Self {
        self.extensions.push(field);
        self
    }

    /// Looks up a raw option value.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Returns the file name without directories and extension.
    #[must_use]
    pub fn stem(&self) -> &str {
        Path::new(&self.name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.name)
    }
}

/// Enum type definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumType {
    /// Enum name, unqualified.
    pub name: String,
    /// Values in declaration order.
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

impl EnumType {
    /// Creates a new enum definition without values.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Adds a value to the enum.
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, number: i32) -> Self {
        self.values.push(EnumValue {
            name: name.into(),
            number,
        });
        self
    }
}

/// Enum value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    /// Value name.
    pub name: String,
    /// Numeric value.
    pub number: i32,
}

/// Field cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldLabel {
    /// Optional singular field.
    #[default]
    Optional,
    /// Required singular field.
    Required,
    /// Repeated field.
    Repeated,
}

impl FieldLabel {
    /// Returns the descriptor wire code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Optional => 1,
            Self::Required => 2,
            Self::Repeated => 3,
        }
    }

    /// Returns true for repeated fields.
    #[must_use]
    pub const fn is_repeated(&self) -> bool {
        matches!(self, Self::Repeated)
    }
}

impl TryFrom<i32> for FieldLabel {
    type Error = SchemaError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Optional),
            2 => Ok(Self::Required),
            3 => Ok(Self::Repeated),
            _ => Err(SchemaError::UnknownLabel { code }),
        }
    }
}

/// Field value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// 64-bit floating point.
    Double,
    /// 32-bit floating point.
    Float,
    /// Signed 64-bit varint.
    Int64,
    /// Unsigned 64-bit varint.
    Uint64,
    /// Signed 32-bit varint.
    Int32,
    /// Unsigned 64-bit fixed width.
    Fixed64,
    /// Unsigned 32-bit fixed width.
    Fixed32,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    String,
    /// Legacy group.
    Group,
    /// Embedded message.
    Message,
    /// Raw bytes.
    Bytes,
    /// Unsigned 32-bit varint.
    Uint32,
    /// Enum value.
    Enum,
    /// Signed 32-bit fixed width.
    Sfixed32,
    /// Signed 64-bit fixed width.
    Sfixed64,
    /// Zigzag-encoded signed 32-bit.
    Sint32,
    /// Zigzag-encoded signed 64-bit.
    Sint64,
}

impl FieldType {
    /// Returns the descriptor wire code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Double => 1,
            Self::Float => 2,
            Self::Int64 => 3,
            Self::Uint64 => 4,
            Self::Int32 => 5,
            Self::Fixed64 => 6,
            Self::Fixed32 => 7,
            Self::Bool => 8,
            Self::String => 9,
            Self::Group => 10,
            Self::Message => 11,
            Self::Bytes => 12,
            Self::Uint32 => 13,
            Self::Enum => 14,
            Self::Sfixed32 => 15,
            Self::Sfixed64 => 16,
            Self::Sint32 => 17,
            Self::Sint64 => 18,
        }
    }

    /// Returns the schema-language name of the type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Float => "float",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Int32 => "int32",
            Self::Fixed64 => "fixed64",
            Self::Fixed32 => "fixed32",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Group => "group",
            Self::Message => "message",
            Self::Bytes => "bytes",
            Self::Uint32 => "uint32",
            Self::Enum => "enum",
            Self::Sfixed32 => "sfixed32",
            Self::Sfixed64 => "sfixed64",
            Self::Sint32 => "sint32",
            Self::Sint64 => "sint64",
        }
    }

    /// Returns true if this is an integer type.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Int64
                | Self::Uint64
                | Self::Int32
                | Self::Fixed64
                | Self::Fixed32
                | Self::Uint32
                | Self::Sfixed32
                | Self::Sfixed64
                | Self::Sint32
                | Self::Sint64
        )
    }

    /// Returns true if this is a floating point type.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Double | Self::Float)
    }

    /// Returns true if fields of this type must carry a type name.
    #[must_use]
    pub const fn needs_type_name(&self) -> bool {
        matches!(self, Self::Message | Self::Enum | Self::Group)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for FieldType {
    type Error = SchemaError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        let field_type = match code {
            1 => Self::Double,
            2 => Self::Float,
            3 => Self::Int64,
            4 => Self::Uint64,
            5 => Self::Int32,
            6 => Self::Fixed64,
            7 => Self::Fixed32,
            8 => Self::Bool,
            9 => Self::String,
            10 => Self::Group,
            11 => Self::Message,
            12 => Self::Bytes,
            13 => Self::Uint32,
            14 => Self::Enum,
            15 => Self::Sfixed32,
            16 => Self::Sfixed64,
            17 => Self::Sint32,
            18 => Self::Sint64,
            _ => return Err(SchemaError::UnknownFieldType { code }),
        };
        Ok(field_type)
    }
}
