//! Enum constant generation.

use protojson_schema::EnumType;

/// Generates the constants object of an enum declared in `namespace`.
#[must_use]
pub fn compile_enum(enum_type: &EnumType, namespace: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{namespace}.{} = {{\n", enum_type.name));
    let values: Vec<String> = enum_type
        .values
        .iter()
        .map(|value| format!("  /** @const */ {}: {}", value.name, value.number))
        .collect();
    if !values.is_empty() {
        output.push_str(&values.join(",\n"));
        output.push('\n');
    }
    output.push_str("};\n\n");

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_enum() {
        let color = EnumType::new("Color")
            .with_value("RED", 0)
            .with_value("GREEN", 1);

        assert_eq!(
            compile_enum(&color, "pkg"),
            "pkg.Color = {\n  /** @const */ RED: 0,\n  /** @const */ GREEN: 1\n};\n\n"
        );
    }

    #[test]
    fn test_compile_nested_enum_negative_value() {
        let kind = EnumType::new("Kind").with_value("UNKNOWN", -1);
        let output = compile_enum(&kind, "pkg.Shape");
        assert!(output.starts_with("pkg.Shape.Kind = {\n"));
        assert!(output.contains("UNKNOWN: -1\n"));
    }

    #[test]
    fn test_compile_empty_enum() {
        assert_eq!(compile_enum(&EnumType::new("Empty"), "pkg"), "pkg.Empty = {\n};\n\n");
    }
}
