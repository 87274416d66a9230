use serde::{Deserialize, Serialize};

/// Output format enumeration for the generated mapping
///
/// It belongs in the application layer as both the CLI (inbound side) and
/// the renderers (outbound adapters) need to understand it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Nested Rust modules with `&str` constants (default)
    #[default]
    Rust,
    /// Java source with nested static classes
    Java,
    /// The language-neutral class hierarchy as JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rust" | "rs" => Ok(OutputFormat::Rust),
            "java" => Ok(OutputFormat::Java),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'rust', 'java' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Rust => write!(f, "rust"),
            OutputFormat::Java => write!(f, "java"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("rust").unwrap(), OutputFormat::Rust);
        assert_eq!(OutputFormat::from_str("rs").unwrap(), OutputFormat::Rust);
        assert_eq!(OutputFormat::from_str("java").unwrap(), OutputFormat::Java);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_from_str_case_insensitive() {
        assert_eq!(OutputFormat::from_str("JAVA").unwrap(), OutputFormat::Java);
        assert_eq!(OutputFormat::from_str("Json").unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let error = OutputFormat::from_str("kotlin").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("kotlin"));
        assert!(OutputFormat::from_str("").is_err());
    }

    #[test]
    fn test_output_format_display_round_trips() {
        for format in [OutputFormat::Rust, OutputFormat::Java, OutputFormat::Json] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Rust);
    }
}
