//! Java source emission for generation records
//!
//! The renderer is the downstream side of the transform contract: it takes
//! a finished [`GenerationRecord`] and produces one compilable enum class.
//! It also owns residual identifier sanitization — the transform leaves
//! illegal characters (e.g. hyphens) in derived names on purpose, and they
//! are mapped to `_` here, at emission time only.

use crate::error::{Error, Result};
use crate::transform::{ElementParams, GenerationRecord, Kind};

const INDENT: &str = "    ";

/// Renders generation records into Java enum source files
#[derive(Debug, Clone, Default)]
pub struct JavaRenderer;

impl JavaRenderer {
    pub fn new() -> Self {
        Self
    }

    /// File name the rendered class belongs in
    pub fn file_name(&self, record: &GenerationRecord) -> String {
        format!("{}.java", record.class_name)
    }

    /// Render one enum class
    pub fn render(&self, record: &GenerationRecord) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!("package {};\n\n", record.package_name));

        if !record.imports.is_empty() {
            for import in &record.imports {
                out.push_str(&format!("import {import};\n"));
            }
            out.push('\n');
        }

        if let Some(doc) = javadoc(record.since.as_deref(), None, "") {
            out.push_str(&doc);
        }
        if record.deprecated == Some(true) {
            out.push_str("@Deprecated\n");
        }
        out.push_str(&format!("public enum {} {{\n", record.class_name));

        for (index, param) in record.params.iter().enumerate() {
            self.render_constant(&mut out, record, param, index)?;
        }
        out.push_str(INDENT);
        out.push_str(";\n");

        match record.kind {
            Kind::Simple => render_simple_body(&mut out, &record.class_name),
            Kind::Custom => render_custom_body(&mut out, &record.class_name),
            Kind::Complex => render_complex_body(&mut out, &record.class_name),
        }

        out.push_str("}\n");
        Ok(out)
    }

    fn render_constant(
        &self,
        out: &mut String,
        record: &GenerationRecord,
        param: &ElementParams,
        index: usize,
    ) -> Result<()> {
        let name = sanitize_identifier(&param.name);
        if name.is_empty() {
            return Err(Error::render(
                &record.class_name,
                format!("member '{}' derives an empty constant name", param.origin),
            ));
        }

        if let Some(doc) = javadoc(param.since.as_deref(), param.description.as_deref(), INDENT) {
            out.push_str(&doc);
        }
        if param.deprecated == Some(true) {
            out.push_str(INDENT);
            out.push_str("@Deprecated\n");
        }

        out.push_str(INDENT);
        match record.kind {
            Kind::Simple => out.push_str(&format!("{name},\n")),
            Kind::Custom => {
                // The quoted internal literal recovers the wire string.
                let internal = param.internal.as_deref().unwrap_or("\"\"");
                out.push_str(&format!("{name}({internal}),\n"));
            }
            Kind::Complex => {
                // Members without an explicit value fall back to their
                // declaration index.
                let value = param.value.unwrap_or(index as i64);
                out.push_str(&format!("{name}({value}),\n"));
            }
        }
        Ok(())
    }
}

/// Replace every character Java forbids in an identifier with `_`
fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Build a Javadoc block from description lines and a since version
fn javadoc(since: Option<&str>, description: Option<&[String]>, indent: &str) -> Option<String> {
    let lines = description.unwrap_or(&[]);
    if since.is_none() && lines.is_empty() {
        return None;
    }

    let mut doc = String::new();
    doc.push_str(indent);
    doc.push_str("/**\n");
    for line in lines {
        doc.push_str(indent);
        doc.push_str(&format!(" * {}\n", line.trim()));
    }
    if let Some(since) = since {
        if !lines.is_empty() {
            doc.push_str(indent);
            doc.push_str(" *\n");
        }
        doc.push_str(indent);
        doc.push_str(&format!(" * @since {since}\n"));
    }
    doc.push_str(indent);
    doc.push_str(" */\n");
    Some(doc)
}

fn render_simple_body(out: &mut String, class_name: &str) {
    out.push('\n');
    push_lines(
        out,
        &[
            "/**".into(),
            " * Convert a string into a constant of this enumeration.".into(),
            " *".into(),
            " * @param value a string matching a constant name".into(),
            " * @return the matching constant, or null if there is no match".into(),
            " */".into(),
            format!("public static {class_name} valueForString(String value) {{"),
            "    try {".into(),
            "        return valueOf(value);".into(),
            "    } catch (Exception e) {".into(),
            "        return null;".into(),
            "    }".into(),
            "}".into(),
        ],
    );
}

fn render_custom_body(out: &mut String, class_name: &str) {
    out.push('\n');
    push_lines(
        out,
        &[
            "private final String INTERNAL_NAME;".into(),
            String::new(),
            format!("private {class_name}(String internalName) {{"),
            "    this.INTERNAL_NAME = internalName;".into(),
            "}".into(),
            String::new(),
            "/**".into(),
            " * Convert an original wire string into a constant of this enumeration.".into(),
            " *".into(),
            " * @param value the wire-exact string".into(),
            " * @return the matching constant, or null if there is no match".into(),
            " */".into(),
            format!("public static {class_name} valueForString(String value) {{"),
            "    if (value == null) {".into(),
            "        return null;".into(),
            "    }".into(),
            format!("    for ({class_name} anEnum : EnumSet.allOf({class_name}.class)) {{"),
            "        if (anEnum.toString().equals(value)) {".into(),
            "            return anEnum;".into(),
            "        }".into(),
            "    }".into(),
            "    return null;".into(),
            "}".into(),
            String::new(),
            "@Override".into(),
            "public String toString() {".into(),
            "    return INTERNAL_NAME;".into(),
            "}".into(),
        ],
    );
}

fn render_complex_body(out: &mut String, class_name: &str) {
    out.push('\n');
    push_lines(
        out,
        &[
            "private final int VALUE;".into(),
            String::new(),
            format!("private {class_name}(int value) {{"),
            "    this.VALUE = value;".into(),
            "}".into(),
            String::new(),
            "/**".into(),
            " * The backing value of this constant.".into(),
            " */".into(),
            "public int getValue() {".into(),
            "    return VALUE;".into(),
            "}".into(),
            String::new(),
            "/**".into(),
            " * Convert a backing value into a constant of this enumeration.".into(),
            " *".into(),
            " * @param value the backing value".into(),
            " * @return the matching constant, or null if there is no match".into(),
            " */".into(),
            format!("public static {class_name} valueForInt(int value) {{"),
            format!("    for ({class_name} anEnum : EnumSet.allOf({class_name}.class)) {{"),
            "        if (anEnum.getValue() == value) {".into(),
            "            return anEnum;".into(),
            "        }".into(),
            "    }".into(),
            "    return null;".into(),
            "}".into(),
        ],
    );
}

fn push_lines(out: &mut String, lines: &[String]) {
    for line in lines {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str(INDENT);
            out.push_str(line);
            out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EnumElement, EnumModel};
    use crate::transform::EnumTransformer;

    const PACKAGE: &str = "com.example.api.enums";

    fn render(model: &EnumModel) -> String {
        let record = EnumTransformer::new(PACKAGE).transform(model);
        JavaRenderer::new().render(&record).unwrap()
    }

    #[test]
    fn test_simple_enum_source() {
        let model = EnumModel::new("ButtonName").with_element(EnumElement::new("OK"));
        let source = render(&model);

        let expected = "\
package com.example.api.enums;

public enum ButtonName {
    OK,
    ;

    /**
     * Convert a string into a constant of this enumeration.
     *
     * @param value a string matching a constant name
     * @return the matching constant, or null if there is no match
     */
    public static ButtonName valueForString(String value) {
        try {
            return valueOf(value);
        } catch (Exception e) {
            return null;
        }
    }
}
";
        assert_eq!(source, expected);
    }

    #[test]
    fn test_custom_enum_sanitizes_constant_but_keeps_wire_string() {
        let model = EnumModel::new("Language")
            .with_element(EnumElement::new("EN-US").with_internal_name("EN-US"));
        let source = render(&model);

        assert!(source.contains("import java.util.EnumSet;"));
        assert!(source.contains("    EN_US(\"EN-US\"),"));
        assert!(source.contains("public static Language valueForString(String value)"));
        assert!(source.contains("return INTERNAL_NAME;"));
    }

    #[test]
    fn test_complex_enum_uses_values_and_index_fallback() {
        let model = EnumModel::new("PredefinedWindows")
            .with_element(EnumElement::new("DEFAULT_WINDOW").with_value(0))
            .with_element(EnumElement::new("PRIMARY_WIDGET").with_value(1))
            .with_element(EnumElement::new("UNNUMBERED"));
        let source = render(&model);

        assert!(source.contains("    DEFAULT_WINDOW(0),"));
        assert!(source.contains("    PRIMARY_WIDGET(1),"));
        // Third member has no explicit value; declaration index stands in.
        assert!(source.contains("    UNNUMBERED(2),"));
        assert!(source.contains("public static PredefinedWindows valueForInt(int value)"));
    }

    #[test]
    fn test_deprecated_and_since_render_as_annotations_and_javadoc() {
        let mut model = EnumModel::new("DisplayType")
            .with_element(EnumElement::new("CID").with_since("3.0.0"));
        model.since = Some("5.0.0".to_string());
        model.deprecated = Some(true);
        let source = render(&model);

        assert!(source.contains("/**\n * @since 5.0.0\n */\n@Deprecated\npublic enum DisplayType {"));
        assert!(source.contains("    /**\n     * @since 3.0.0\n     */\n    CID,"));
    }

    #[test]
    fn test_description_lines_become_javadoc() {
        let model = EnumModel::new("Result").with_element(
            EnumElement::new("SUCCESS")
                .with_description(vec!["The request succeeded".to_string()]),
        );
        let source = render(&model);
        assert!(source.contains("    /**\n     * The request succeeded\n     */\n    SUCCESS,"));
    }

    #[test]
    fn test_empty_derived_name_is_an_error() {
        // An internal_name equal to "<ClassName>_" strips to the empty string.
        let model =
            EnumModel::new("Edge").with_element(EnumElement::new("X").with_internal_name("Edge_"));
        let record = EnumTransformer::new(PACKAGE).transform(&model);
        let err = JavaRenderer::new().render(&record).unwrap_err();
        assert!(err.to_string().contains("empty constant name"));
    }

    #[test]
    fn test_file_name() {
        let record = EnumTransformer::new(PACKAGE).transform(&EnumModel::new("Result"));
        assert_eq!(JavaRenderer::new().file_name(&record), "Result.java");
    }
}
