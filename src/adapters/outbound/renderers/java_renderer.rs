use crate::dependency_mapping::domain::ClassSpec;
use crate::ports::outbound::ClassRenderer;
use crate::shared::Result;
use std::collections::HashSet;
use std::fmt::Write;

const GENERATED_HEADER: &str = "// Generated by deps-mapper. Do not edit.\n";

const INDENT: &str = "    ";

/// Keywords and literals that cannot name a Java member
const JAVA_RESERVED: &[&str] = &[
    "_", "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

/// JavaSourceRenderer adapter for generating a Java source file
///
/// This adapter implements the ClassRenderer port. Classes become
/// `public static final class` members holding `public static final String`
/// constants. Java forbids a member class named like an enclosing class, so
/// such classes (and reserved words) get a `_` suffix.
pub struct JavaSourceRenderer {
    package: Option<String>,
}

impl JavaSourceRenderer {
    pub fn new() -> Self {
        Self { package: None }
    }

    /// Adds a `package` declaration to the generated file
    pub fn with_package(package: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
        }
    }

    fn render_class(
        &self,
        out: &mut String,
        spec: &ClassSpec,
        class_name: &str,
        enclosing: &mut Vec<String>,
    ) {
        let depth = enclosing.len();
        let indent = INDENT.repeat(depth);
        let inner_indent = INDENT.repeat(depth + 1);
        let modifiers = if depth == 0 {
            "public final class"
        } else {
            "public static final class"
        };

        let _ = writeln!(out, "{}{} {} {{", indent, modifiers, class_name);
        let _ = writeln!(out, "{}private {}() {{}}", inner_indent, class_name);

        for field in &spec.fields {
            let _ = writeln!(
                out,
                "{}public static final String {} = \"{}\";",
                inner_indent,
                java_ident(&field.name),
                escape_java_string(&field.value)
            );
        }

        enclosing.push(class_name.to_string());
        let mut taken: HashSet<String> = HashSet::new();
        for inner in &spec.inner_classes {
            let mut name = java_ident(&inner.name);
            while enclosing.contains(&name) || taken.contains(&name) {
                name.push('_');
            }
            taken.insert(name.clone());

            out.push('\n');
            self.render_class(out, inner, &name, enclosing);
        }
        enclosing.pop();

        let _ = writeln!(out, "{}}}", indent);
    }
}

impl Default for JavaSourceRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRenderer for JavaSourceRenderer {
    fn render(&self, spec: &ClassSpec) -> Result<String> {
        let mut out = String::new();
        out.push_str(GENERATED_HEADER);
        if let Some(package) = &self.package {
            let _ = writeln!(out, "package {};", package);
        }
        out.push('\n');
        self.render_class(&mut out, spec, &java_ident(&spec.name), &mut Vec::new());
        Ok(out)
    }

    fn default_file_name(&self, root_class_name: &str) -> String {
        format!("{}.java", java_ident(root_class_name))
    }
}

fn java_ident(name: &str) -> String {
    if JAVA_RESERVED.contains(&name) {
        format!("{}_", name)
    } else {
        name.to_string()
    }
}

/// Escapes a value for a Java string literal, non-ASCII as UTF-16 `\uXXXX`
fn escape_java_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_ascii() && !c.is_ascii_control() => escaped.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(escaped, "\\u{:04x}", unit);
                }
            }
        }
    }
    escaped
}
