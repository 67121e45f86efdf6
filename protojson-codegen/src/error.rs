//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Descriptor validation error.
    #[error("schema error: {0}")]
    Schema(#[from] protojson_schema::SchemaError),

    /// Type reference without the leading scope marker.
    #[error("only fully qualified names are supported: '{reference}' (in {context})")]
    UnqualifiedReference {
        /// Offending reference.
        reference: String,
        /// Where the reference was found.
        context: String,
    },

    /// File resolves to an empty output namespace.
    #[error("file '{file}' has no package and no namespace option")]
    MissingNamespace {
        /// Schema file name.
        file: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates an unqualified reference error.
    pub fn unqualified(reference: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnqualifiedReference {
            reference: reference.into(),
            context: context.into(),
        }
    }
}

/// Non-fatal diagnostic raised while compiling a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Schema file the warning belongs to.
    pub file: String,
    /// Human readable message.
    pub message: String,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.file, self.message)
    }
}
