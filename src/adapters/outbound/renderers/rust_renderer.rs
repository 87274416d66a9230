use crate::dependency_mapping::domain::ClassSpec;
use crate::ports::outbound::ClassRenderer;
use crate::shared::Result;
use std::fmt::Write;

/// First line of every generated Rust file
const GENERATED_HEADER: &str = "// @generated by deps-mapper. Do not edit.\n";

const INDENT: &str = "    ";

/// Strict and reserved keywords that need the raw identifier form
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be used even as raw identifiers
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// RustModuleRenderer adapter for generating a Rust module tree
///
/// This adapter implements the ClassRenderer port. Every class becomes a
/// `pub mod`, every field a `pub const NAME: &str`. A constant and a module
/// sharing a name live in different namespaces, so both are emitted as is.
///
/// ```text
/// pub mod Libs {
///     pub mod Com {
///         pub const Example: &str = "com:example";
///         pub mod Example { ... }
///     }
/// }
/// ```
pub struct RustModuleRenderer;

impl RustModuleRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_module(&self, out: &mut String, spec: &ClassSpec, depth: usize) {
        let indent = INDENT.repeat(depth);
        let inner_indent = INDENT.repeat(depth + 1);

        let _ = writeln!(out, "{}pub mod {} {{", indent, rust_ident(&spec.name));

        for field in &spec.fields {
            let _ = writeln!(
                out,
                "{}pub const {}: &str = {:?};",
                inner_indent,
                rust_ident(&field.name),
                field.value
            );
        }

        for (index, inner) in spec.inner_classes.iter().enumerate() {
            if index > 0 || !spec.fields.is_empty() {
                out.push('\n');
            }
            self.render_module(out, inner, depth + 1);
        }

        let _ = writeln!(out, "{}}}", indent);
    }
}

impl Default for RustModuleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRenderer for RustModuleRenderer {
    fn render(&self, spec: &ClassSpec) -> Result<String> {
        let mut out = String::new();
        out.push_str(GENERATED_HEADER);
        out.push('\n');
        out.push_str("#[allow(non_snake_case, non_upper_case_globals, dead_code)]\n");
        self.render_module(&mut out, spec, 0);
        Ok(out)
    }

    fn default_file_name(&self, _root_class_name: &str) -> String {
        "deps_mapping.rs".to_string()
    }
}

/// Turns a generated name into a usable Rust identifier
fn rust_ident(name: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&name) || name == "_" {
        format!("{}_", name)
    } else if RUST_KEYWORDS.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}
