//! # protojson Codegen
//!
//! JavaScript code generation from protocol buffer descriptors.
//!
//! This crate provides:
//! - Package to namespace resolution and type reference normalization
//! - Field metadata, enum constant and message constructor generation
//! - Accessor methods over the ProtoJson runtime's numbered-field storage
//! - Extension registration, emitted once per file after all declarations
//!
//! The descriptor tree comes from a protoc plugin harness; reading the
//! generation request and writing the response stay with that harness.

pub mod config;
pub mod error;
pub mod generator;
pub mod js;

pub use config::{FileOptions, GeneratorConfig};
pub use error::{CodegenError, Warning};
pub use generator::{GeneratedFile, Generation, Generator};
pub use js::PackageRegistry;

use protojson_schema::SchemaFile;

/// Generates the JavaScript module for a single schema file with the default
/// configuration.
///
/// # Arguments
/// * `file` - Schema file descriptor
///
/// # Returns
/// The generated files and any warnings.
///
/// # Errors
/// Returns `CodegenError` if validation or generation fails.
pub fn generate_file(file: &SchemaFile) -> Result<Generation, CodegenError> {
    Generator::default().compile_file(file)
}

/// Generates JavaScript modules for the requested files of a generation
/// request with the default configuration.
///
/// # Arguments
/// * `files` - Every file of the request, dependencies included
/// * `files_to_generate` - Names of the files to emit modules for
///
/// # Returns
/// The generated files and any warnings.
///
/// # Errors
/// Returns `CodegenError` if any requested file fails to compile.
pub fn generate<S: AsRef<str>>(
    files: &[SchemaFile],
    files_to_generate: &[S],
) -> Result<Generation, CodegenError> {
    Generator::default().compile_request(files, files_to_generate)
}
