//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! ```
//! use protojson::prelude::*;
//! ```

// Descriptor model
pub use protojson_schema::{
    EnumType, EnumValue, FieldDescriptor, FieldLabel, FieldType, MessageType, SchemaError,
    SchemaFile, validate_file,
};

// Generation
pub use protojson_codegen::{
    CodegenError, FileOptions, GeneratedFile, Generation, Generator, GeneratorConfig,
    PackageRegistry, Warning,
};
