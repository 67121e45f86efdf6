//! File-level code generation.
//!
//! [`Generator`] turns one schema file into one JavaScript module for the
//! ProtoJson runtime, and a whole generation request into one module per
//! requested file.

use crate::config::{FileOptions, GeneratorConfig};
use crate::error::{CodegenError, Warning};
use crate::js::{
    ExtensionGroup, NamespaceResolver, PackageRegistry, compile_enum, compile_message,
    resolve_namespace,
};
use protojson_schema::{SchemaFile, validate_file};

/// A generated output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Output file name.
    pub name: String,
    /// File content.
    pub content: String,
}

/// Result of a successful generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    /// Generated files, one per compiled schema file.
    pub files: Vec<GeneratedFile>,
    /// Non-fatal diagnostics, in the order they were raised.
    pub warnings: Vec<Warning>,
}

impl Generation {
    fn extend(&mut self, other: Generation) {
        self.files.extend(other.files);
        self.warnings.extend(other.warnings);
    }
}

/// JavaScript module generator.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
    registry: PackageRegistry,
}

impl Generator {
    /// Creates a generator with the given configuration and no known packages.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            registry: PackageRegistry::new(),
        }
    }

    /// Replaces the set of globally known packages.
    #[must_use]
    pub fn with_registry(mut self, registry: PackageRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Binds a globally known package to its output namespace.
    pub fn register_package(&mut self, package: impl Into<String>, namespace: impl Into<String>) {
        self.registry.register(package, namespace);
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns the globally known packages.
    #[must_use]
    pub fn registry(&self) -> &PackageRegistry {
        &self.registry
    }

    /// Compiles one schema file against the globally known packages.
    ///
    /// # Errors
    /// Returns `CodegenError` if the file fails validation, resolves to an
    /// empty namespace, or holds a type reference without the leading dot.
    /// No output is produced in that case.
    pub fn compile_file(&self, file: &SchemaFile) -> Result<Generation, CodegenError> {
        self.compile_with(file, &self.registry)
    }

    /// Compiles the files named in `files_to_generate`.
    ///
    /// Every file in `files` (dependencies included) contributes its package
    /// binding, so cross-file references resolve to the right namespaces.
    ///
    /// # Errors
    /// Returns `CodegenError` if a requested file is missing from `files` or
    /// any requested file fails to compile. The first failure aborts the run.
    pub fn compile_request<S: AsRef<str>>(
        &self,
        files: &[SchemaFile],
        files_to_generate: &[S],
    ) -> Result<Generation, CodegenError> {
        let mut registry = self.registry.clone();
        for file in files {
            registry.register_file(file);
        }

        let mut generation = Generation::default();
        for name in files_to_generate {
            let name = name.as_ref();
            let file = files
                .iter()
                .find(|file| file.name == name)
                .ok_or_else(|| {
                    CodegenError::generation(format!("file '{name}' is not part of the request"))
                })?;
            generation.extend(self.compile_with(file, &registry)?);
        }

        Ok(generation)
    }

    fn compile_with(
        &self,
        file: &SchemaFile,
        known: &PackageRegistry,
    ) -> Result<Generation, CodegenError> {
        validate_file(file)?;

        let options = FileOptions::from_file(file);
        let output_name = format!(
            "{}{}",
            file.stem(),
            options.suffix_or(&self.config.default_suffix)
        );

        let namespace = resolve_namespace(file, &options);
        if namespace.is_empty() {
            return Err(CodegenError::MissingNamespace {
                file: file.name.clone(),
            });
        }

        tracing::debug!(file = %file.name, output = %output_name, %namespace, "compiling file");

        let mut registry = known.clone();
        registry.register(file.package.clone(), namespace.clone());

        let mut resolver = NamespaceResolver::new(&registry);
        let mut extensions = ExtensionGroup::new();
        let runtime = self.config.runtime.as_str();

        let mut output = self.prologue(file, &namespace);

        for enum_type in &file.enums {
            output.push_str(&compile_enum(enum_type, &namespace));
        }

        for msg in &file.messages {
            output.push_str(&compile_message(
                msg,
                &namespace,
                runtime,
                &mut resolver,
                &mut extensions,
            )?);
        }

        extensions.record_all(&namespace, &file.extensions);
        output.push_str(&extensions.emit(runtime, &mut resolver)?);

        output.push_str("})();\n");

        let warnings = resolver
            .into_warnings()
            .into_iter()
            .map(|message| Warning {
                file: file.name.clone(),
                message,
            })
            .collect();

        Ok(Generation {
            files: vec![GeneratedFile {
                name: output_name,
                content: output,
            }],
            warnings,
        })
    }

    /// Generates the banner, the wrapper opening and the export shim.
    fn prologue(&self, file: &SchemaFile, namespace: &str) -> String {
        let runtime = &self.config.runtime;
        let mut parts = namespace.split('.');
        let root = parts.next().unwrap_or(namespace);

        let mut output = String::new();
        output.push_str(&format!(
            "// DO NOT EDIT! Generated by protojson-codegen {}\n",
            env!("CARGO_PKG_VERSION")
        ));
        output.push_str(&format!("// Source: {}\n", file.name));
        output.push_str(&format!("//   Date: {}\n", self.config.stamp()));
        output.push('\n');

        output.push_str("(function(){\n");
        output.push_str("/** @namespace */\n");
        output.push_str(&format!("var {root} = this.{root} || {{}};\n"));
        // Hoisted `var`s stay outside the shim branches.
        output.push_str(&format!("var {runtime} = this.{runtime};\n"));
        output.push('\n');

        output.push_str("// Make it CommonJS compatible\n");
        output.push_str("if (typeof exports !== 'undefined') {\n");
        output.push_str(&format!(
            "  if (!{runtime} && typeof require !== 'undefined')\n"
        ));
        output.push_str(&format!(
            "    {runtime} = require('{}');\n",
            self.config.runtime_module
        ));
        output.push_str(&format!("  {root} = exports;\n"));
        output.push_str("} else {\n");
        output.push_str(&format!("  this.{root} = {root};\n"));
        output.push_str("}\n");

        // Dotted namespaces hang below the exported root.
        let mut scope = root.to_string();
        for part in parts {
            scope = format!("{scope}.{part}");
            output.push_str(&format!("{scope} = {scope} || {{}};\n"));
        }
        output.push('\n');

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LEGACY_PACKAGE_OPTION, NAMESPACE_OPTION, SUFFIX_OPTION};
    use chrono::NaiveDate;
    use protojson_schema::{EnumType, FieldDescriptor, FieldType, MessageType};

    fn generator() -> Generator {
        let at = NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_opt(3, 4, 5))
            .expect("valid date");
        Generator::new(GeneratorConfig::new().timestamp(at))
    }

    fn point_file() -> SchemaFile {
        SchemaFile::new("proto/shapes.proto", "pkg")
            .with_enum(
                EnumType::new("Color")
                    .with_value("RED", 0)
                    .with_value("GREEN", 1),
            )
            .with_message(
                MessageType::new("Point")
                    .with_field(FieldDescriptor::optional("x", 1, FieldType::Int32))
                    .with_field(FieldDescriptor::optional("y", 2, FieldType::Int32)),
            )
    }

    fn single(generation: Generation) -> GeneratedFile {
        assert_eq!(generation.files.len(), 1);
        generation.files.into_iter().next().expect("one file")
    }

    #[test]
    fn test_compile_point_file() {
        let generation = generator().compile_file(&point_file()).expect("compile");
        assert!(generation.warnings.is_empty());
        let file = single(generation);

        assert_eq!(file.name, "shapes.js");
        let content = &file.content;
        assert!(content.starts_with("// DO NOT EDIT! Generated by protojson-codegen "));
        assert!(content.contains("// Source: proto/shapes.proto\n"));
        assert!(content.contains("//   Date: 2024-01-02 03:04:05\n"));
        assert!(content.contains(
            "(function(){\n/** @namespace */\nvar pkg = this.pkg || {};\nvar ProtoJson = this.ProtoJson;\n\n"
        ));
        assert!(content.contains("  pkg = exports;\n} else {\n  this.pkg = pkg;\n}\n"));
        assert!(content.contains(
            "pkg.Color = {\n  /** @const */ RED: 0,\n  /** @const */ GREEN: 1\n};\n"
        ));
        assert!(content.contains(
            "pkg.Point = ProtoJson.create({\n  fields: {\n    1: ['x', 1, 5, null, null, {}],\n    2: ['y', 1, 5, null, null, {}]\n  },\n"
        ));
        for method in [
            "hasX", "getX", "setX", "clearX", "hasY", "getY", "setY", "clearY",
        ] {
            assert!(
                content.contains(&format!("pkg.Point.prototype.{method} = function(")),
                "missing {method}"
            );
        }
        assert_eq!(content.matches(".prototype.").count(), 8);
        assert!(content.ends_with("})();\n"));
    }

    #[test]
    fn test_enums_precede_messages() {
        let file = single(generator().compile_file(&point_file()).expect("compile"));
        let color = file.content.find("pkg.Color = {").unwrap();
        let point = file.content.find("pkg.Point = ProtoJson.create(").unwrap();
        assert!(color < point);
    }

    #[test]
    fn test_suffix_changes_only_name() {
        let generator = generator();
        let plain = single(generator.compile_file(&point_file()).expect("compile"));
        let module = single(
            generator
                .compile_file(&point_file().with_option(SUFFIX_OPTION, ".mjs"))
                .expect("compile"),
        );

        assert_eq!(plain.name, "shapes.js");
        assert_eq!(module.name, "shapes.mjs");
        assert_eq!(plain.content, module.content);
    }

    #[test]
    fn test_default_suffix_from_config() {
        let generator = Generator::new(GeneratorConfig::new().default_suffix(".cjs"));
        let file = single(generator.compile_file(&point_file()).expect("compile"));
        assert_eq!(file.name, "shapes.cjs");
    }

    #[test]
    fn test_unqualified_reference_aborts_file() {
        let file = point_file().with_message(MessageType::new("Line").with_field(
            FieldDescriptor::repeated("points", 1, FieldType::Message).with_type_name("pkg.Point"),
        ));

        match generator().compile_file(&file) {
            Err(CodegenError::UnqualifiedReference { reference, .. }) => {
                assert_eq!(reference, "pkg.Point");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_descriptor_rejected() {
        let file = point_file().with_message(
            MessageType::new("Bad").with_field(FieldDescriptor::optional("e", 1, FieldType::Enum)),
        );
        assert!(matches!(
            generator().compile_file(&file),
            Err(CodegenError::Schema(_))
        ));
    }

    #[test]
    fn test_missing_namespace() {
        let file = SchemaFile::new("bare.proto", "").with_message(MessageType::new("Thing"));
        assert!(matches!(
            generator().compile_file(&file),
            Err(CodegenError::MissingNamespace { .. })
        ));
    }

    #[test]
    fn test_extensions_emitted_after_declarations() {
        let file = SchemaFile::new("ext.proto", "pkg")
            .with_message(MessageType::new("Base"))
            .with_message(
                MessageType::new("Holder")
                    .with_extension(
                        FieldDescriptor::optional("note", 100, FieldType::String)
                            .extending(".pkg.Base"),
                    )
                    .with_nested_type(MessageType::new("Inner").with_extension(
                        FieldDescriptor::optional("flag", 101, FieldType::Bool)
                            .extending(".pkg.Base"),
                    )),
            )
            .with_message(MessageType::new("Last"))
            .with_extension(
                FieldDescriptor::optional("top", 102, FieldType::Int32).extending(".pkg.Base"),
            );

        let content = single(generator().compile_file(&file).expect("compile")).content;

        assert_eq!(content.matches("ProtoJson.extend(pkg.Base, {").count(), 3);
        let last_decl = content.find("pkg.Last = ProtoJson.create(").unwrap();
        let first_extend = content.find("ProtoJson.extend(").unwrap();
        assert!(last_decl < first_extend);

        let inner = content.find("101: ['pkg.Holder.Inner.flag', 1, 8, null, null, {}]").unwrap();
        let holder = content.find("100: ['pkg.Holder.note', 1, 9, null, null, {}]").unwrap();
        let top = content.find("102: ['pkg.top', 1, 5, null, null, {}]").unwrap();
        assert!(inner < holder && holder < top);
    }

    #[test]
    fn test_namespace_option_drives_output_and_references() {
        let file = SchemaFile::new("app.proto", "acme.app")
            .with_option(NAMESPACE_OPTION, "Acme")
            .with_message(
                MessageType::new("Order").with_field(
                    FieldDescriptor::optional("item", 1, FieldType::Message)
                        .with_type_name(".acme.app.Item"),
                ),
            )
            .with_message(MessageType::new("Item"));

        let content = single(generator().compile_file(&file).expect("compile")).content;
        assert!(content.contains("var Acme = this.Acme || {};\n"));
        assert!(content.contains("Acme.Order = ProtoJson.create("));
        assert!(content.contains("1: ['item', 1, 11, 'Acme.Item', null, {}]"));
        assert!(content.contains(" * @return {Acme.Item}\n"));
    }

    #[test]
    fn test_legacy_package_option() {
        let file = point_file().with_option(LEGACY_PACKAGE_OPTION, "Legacy");
        let content = single(generator().compile_file(&file).expect("compile")).content;
        assert!(content.contains("Legacy.Point = ProtoJson.create("));
    }

    #[test]
    fn test_dotted_namespace_guard() {
        let file = SchemaFile::new("geo.proto", "acme.geo").with_message(MessageType::new("Point"));
        let content = single(generator().compile_file(&file).expect("compile")).content;

        assert!(content.contains("var acme = this.acme || {};\n"));
        assert!(content.contains("  acme = exports;\n"));
        assert!(content.contains("}\nacme.geo = acme.geo || {};\n\n"));
        assert!(content.contains("acme.geo.Point = ProtoJson.create("));
    }

    #[test]
    fn test_shim_declarations_precede_branches() {
        let file = SchemaFile::new("geo.proto", "acme.geo").with_message(MessageType::new("Point"));
        let content = single(generator().compile_file(&file).expect("compile")).content;

        let shim = content.find("if (typeof exports !== 'undefined') {").expect("shim");
        let root = content.find("var acme = this.acme || {};\n").expect("root guard");
        let runtime = content.find("var ProtoJson = this.ProtoJson;\n").expect("runtime");
        assert!(root < shim);
        assert!(runtime < shim);

        let branches = &content[shim..];
        assert_eq!(branches.matches("var ").count(), 0);
        assert!(branches.contains("  if (!ProtoJson && typeof require !== 'undefined')\n"));
        assert!(branches.contains("} else {\n  this.acme = acme;\n}\n"));
        assert_eq!(content.matches("var acme").count(), 1);
    }

    #[test]
    fn test_custom_runtime_symbol() {
        let generator = Generator::new(
            GeneratorConfig::new()
                .runtime("PJ")
                .runtime_module("./runtime/protojson"),
        );
        let content = single(generator.compile_file(&point_file()).expect("compile")).content;
        assert!(content.contains("\nvar PJ = this.PJ;\n"));
        assert!(content.contains("    PJ = require('./runtime/protojson');\n"));
        assert!(content.contains("pkg.Point = PJ.create("));
        assert!(!content.contains("ProtoJson"));
    }

    #[test]
    fn test_unknown_package_warns_and_continues() {
        let file = SchemaFile::new("w.proto", "pkg").with_message(
            MessageType::new("Wrapper")
                .with_field(
                    FieldDescriptor::optional("at", 1, FieldType::Message)
                        .with_type_name(".google.protobuf.Timestamp"),
                )
                .with_field(
                    FieldDescriptor::repeated("seen", 2, FieldType::Message)
                        .with_type_name(".google.protobuf.Timestamp"),
                ),
        );

        let generation = generator().compile_file(&file).expect("compile");
        assert_eq!(
            generation.warnings,
            vec![Warning {
                file: "w.proto".to_string(),
                message: "Non tracked package name found \"google.protobuf.Timestamp\"".to_string(),
            }]
        );
        let content = &generation.files[0].content;
        assert!(content.contains("1: ['at', 1, 11, 'google.protobuf.Timestamp', null, {}]"));
    }

    #[test]
    fn test_registered_package_resolves() {
        let mut generator = generator();
        generator.register_package("google.protobuf", "Google.Protobuf");
        let file = SchemaFile::new("w.proto", "pkg").with_message(
            MessageType::new("Wrapper").with_field(
                FieldDescriptor::optional("at", 1, FieldType::Message)
                    .with_type_name(".google.protobuf.Timestamp"),
            ),
        );

        let generation = generator.compile_file(&file).expect("compile");
        assert!(generation.warnings.is_empty());
        assert!(generation.files[0]
            .content
            .contains("'Google.Protobuf.Timestamp'"));
        assert!(generator.registry().contains("google.protobuf"));
        assert!(!generator.registry().contains("pkg"));
    }

    #[test]
    fn test_compile_request() {
        let common = SchemaFile::new("common/geo.proto", "acme.geo")
            .with_option(NAMESPACE_OPTION, "Geo")
            .with_message(MessageType::new("Point"));
        let shapes = SchemaFile::new("shapes.proto", "acme.shapes").with_message(
            MessageType::new("Circle").with_field(
                FieldDescriptor::optional("center", 1, FieldType::Message)
                    .with_type_name(".acme.geo.Point"),
            ),
        );
        let files = vec![common, shapes];

        let generation = generator()
            .compile_request(&files, &["shapes.proto"])
            .expect("compile");
        assert!(generation.warnings.is_empty());
        assert_eq!(generation.files.len(), 1);
        assert_eq!(generation.files[0].name, "shapes.js");
        assert!(generation.files[0]
            .content
            .contains("1: ['center', 1, 11, 'Geo.Point', null, {}]"));

        let both = generator()
            .compile_request(&files, &["common/geo.proto", "shapes.proto"])
            .expect("compile");
        let names: Vec<&str> = both.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["geo.js", "shapes.js"]);
    }

    #[test]
    fn test_compile_request_unknown_file() {
        let files = vec![point_file()];
        let result = generator().compile_request(&files, &["missing.proto"]);
        assert!(matches!(result, Err(CodegenError::Generation { .. })));
    }

    #[test]
    fn test_generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Generator>();
    }
}
