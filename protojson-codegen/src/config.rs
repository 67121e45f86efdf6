//! Generator configuration.
//!
//! Two layers: [`GeneratorConfig`] holds generator-wide settings, and
//! [`FileOptions`] is the typed view of one schema file's `json.*` options,
//! resolved once when compilation of that file starts.

use chrono::NaiveDateTime;
use protojson_schema::SchemaFile;

/// Option overriding the output namespace. Highest priority.
pub const NAMESPACE_OPTION: &str = "json.namespace";
/// Legacy option overriding the output namespace.
pub const LEGACY_PACKAGE_OPTION: &str = "json.package";
/// Option overriding the output file suffix.
pub const SUFFIX_OPTION: &str = "json.suffix";

/// Output suffix used when a file sets no `json.suffix`.
pub const DEFAULT_SUFFIX: &str = ".js";
/// Global symbol of the runtime library in generated code.
pub const DEFAULT_RUNTIME: &str = "ProtoJson";
/// Format of the banner timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Typed per-file options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileOptions {
    /// `json.namespace`.
    pub namespace: Option<String>,
    /// `json.package`.
    pub legacy_package: Option<String>,
    /// `json.suffix`.
    pub suffix: Option<String>,
}

impl FileOptions {
    /// Resolves the recognized options of a schema file.
    ///
    /// Unrecognized keys are ignored.
    #[must_use]
    pub fn from_file(file: &SchemaFile) -> Self {
        Self {
            namespace: file.option(NAMESPACE_OPTION).map(str::to_string),
            legacy_package: file.option(LEGACY_PACKAGE_OPTION).map(str::to_string),
            suffix: file.option(SUFFIX_OPTION).map(str::to_string),
        }
    }

    /// Returns the output suffix, falling back to `default`.
    #[must_use]
    pub fn suffix_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.suffix.as_deref().unwrap_or(default)
    }
}

/// Generator-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Global symbol of the runtime in generated code. Default `ProtoJson`.
    pub runtime: String,
    /// Module path passed to `require` under CommonJS. Default `ProtoJson`.
    pub runtime_module: String,
    /// Output suffix when a file sets none. Default `.js`.
    pub default_suffix: String,
    /// Fixed banner timestamp. `None` stamps the local time of each run.
    pub timestamp: Option<NaiveDateTime>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime: DEFAULT_RUNTIME.to_string(),
            runtime_module: DEFAULT_RUNTIME.to_string(),
            default_suffix: DEFAULT_SUFFIX.to_string(),
            timestamp: None,
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the runtime symbol.
    #[must_use]
    pub fn runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = runtime.into();
        self
    }

    /// Sets the CommonJS module path of the runtime.
    #[must_use]
    pub fn runtime_module(mut self, module: impl Into<String>) -> Self {
        self.runtime_module = module.into();
        self
    }

    /// Sets the default output suffix.
    #[must_use]
    pub fn default_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.default_suffix = suffix.into();
        self
    }

    /// Pins the banner timestamp.
    #[must_use]
    pub fn timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Returns the banner timestamp for a run.
    #[must_use]
    pub fn stamp(&self) -> String {
        self.timestamp
            .unwrap_or_else(|| chrono::Local::now().naive_local())
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }
}
