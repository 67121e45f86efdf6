//! Example generator run.
//!
//! Run with: `cargo run --example generate [descriptor.json]`
//!
//! Without arguments a built-in schema is compiled. With a path, the file is
//! read as a JSON-encoded `SchemaFile`. Set `RUST_LOG=debug` to trace the
//! traversal.

use anyhow::Context;
use protojson::prelude::*;
use tracing_subscriber::EnvFilter;

fn sample() -> SchemaFile {
    SchemaFile::new("shapes.proto", "demo.shapes")
        .with_option("json.namespace", "Shapes")
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
        .with_message(
            MessageType::new("Polygon")
                .with_field(
                    FieldDescriptor::repeated("points", 1, FieldType::Message)
                        .with_type_name(".demo.shapes.Point"),
                )
                .with_field(
                    FieldDescriptor::optional("fill", 2, FieldType::Enum)
                        .with_type_name(".demo.shapes.Color")
                        .with_default("RED"),
                )
                .with_field(
                    FieldDescriptor::optional("label", 3, FieldType::String)
                        .with_default("unnamed \"shape\""),
                )
                .with_extension(
                    FieldDescriptor::optional("area", 100, FieldType::Double)
                        .extending(".demo.shapes.Point"),
                ),
        )
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let file = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {path}"))?;
            serde_json::from_str::<SchemaFile>(&json)
                .with_context(|| format!("Failed to parse descriptor {path}"))?
        }
        None => sample(),
    };

    let generation = Generator::default().compile_file(&file)?;

    for warning in &generation.warnings {
        eprintln!("warning: {warning}");
    }
    for output in &generation.files {
        println!("// ---- {} ----", output.name);
        println!("{}", output.content);
    }

    Ok(())
}
