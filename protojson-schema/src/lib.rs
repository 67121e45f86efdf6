//! # protojson Schema
//!
//! Descriptor model for the protojson code generator.
//!
//! This crate provides:
//! - File, message, enum and field descriptors as handed over by a protoc plugin harness
//! - Wire codes for field labels and field types
//! - Builder helpers for assembling descriptor trees in code
//! - Structural validation of a descriptor tree

pub mod error;
pub mod messages;
pub mod types;
pub mod validation;

pub use error::SchemaError;
pub use messages::{FieldDescriptor, MessageType};
pub use types::{EnumType, EnumValue, FieldLabel, FieldType, SchemaFile};
pub use validation::validate_file;
