//! # protojson
//!
//! Protocol buffer to JavaScript code generation for the ProtoJson runtime.
//!
//! Given the descriptor tree of a schema file, protojson emits a JavaScript
//! module that registers each message with the runtime, exposes enum
//! constants, adds `has`/`get`/`set`/`clear` accessors per field and registers
//! extension fields on the messages they extend.
//!
//! ## Quick Start
//!
//! ```
//! use protojson::prelude::*;
//!
//! let file = SchemaFile::new("point.proto", "geo").with_message(
//!     MessageType::new("Point")
//!         .with_field(FieldDescriptor::optional("x", 1, FieldType::Int32))
//!         .with_field(FieldDescriptor::optional("y", 2, FieldType::Int32)),
//! );
//!
//! let generation = Generator::default().compile_file(&file)?;
//! assert_eq!(generation.files[0].name, "point.js");
//! assert!(generation.files[0].content.contains("geo.Point.prototype.getX"));
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Descriptor model and validation
//! - [`codegen`] - JavaScript generation

pub mod prelude;

/// Descriptor model and validation.
pub mod schema {
    pub use protojson_schema::*;
}

/// JavaScript generation from descriptors.
pub mod codegen {
    pub use protojson_codegen::*;
}

// Re-export commonly used items at the crate root
pub use protojson_codegen::{
    CodegenError, GeneratedFile, Generation, Generator, GeneratorConfig, PackageRegistry, Warning,
    generate, generate_file,
};
pub use protojson_schema::{
    EnumType, FieldDescriptor, FieldLabel, FieldType, MessageType, SchemaError, SchemaFile,
};
