use crate::shared::error::MapperError;
use crate::shared::Result;

/// Maximum length for a dependency notation (security limit)
pub const MAX_NOTATION_LENGTH: usize = 512;

/// NewType wrapper for a validated Maven notation (`group:artifact[:version...]`)
///
/// The stored value is the trimmed input. Segments after the artifact id
/// (version, classifier) are kept in the value but ignored for naming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Notation(String);

impl Notation {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(MapperError::invalid_notation(raw, "notation is empty").into());
        }

        // Security: Length limit to prevent DoS
        if trimmed.len() > MAX_NOTATION_LENGTH {
            return Err(MapperError::invalid_notation(
                &truncate_for_display(trimmed),
                format!(
                    "notation is too long ({} bytes). Maximum allowed: {} bytes",
                    trimmed.len(),
                    MAX_NOTATION_LENGTH
                ),
            )
            .into());
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(
                MapperError::invalid_notation(trimmed, "notation contains whitespace").into(),
            );
        }

        let Some((group, rest)) = trimmed.split_once(':') else {
            return Err(MapperError::invalid_notation(trimmed, "missing `:` separator").into());
        };

        if group.is_empty() {
            return Err(MapperError::invalid_notation(trimmed, "group is empty").into());
        }

        let artifact = rest.split(':').next().unwrap_or_default();
        if artifact.is_empty() {
            return Err(MapperError::invalid_notation(trimmed, "artifact id is empty").into());
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Group path, everything before the first `:`
    pub fn group(&self) -> &str {
        self.0.split(':').next().unwrap_or_default()
    }

    /// Artifact id, the segment between the first and second `:`
    pub fn artifact(&self) -> &str {
        self.0.split(':').nth(1).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn truncate_for_display(value: &str) -> String {
    let head: String = value.chars().take(64).collect();
    format!("{}...", head)
}
