use crate::shared::Result;
use std::cell::RefCell;

/// Maximum number of exclude patterns to prevent DoS attacks
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// NotationFilter - Drops notations matching exclusion patterns
///
/// Patterns are matched against `group:artifact` (any version suffix is
/// ignored) and support '*' to match zero or more characters.
/// Patterns are case-sensitive and validated against a character whitelist.
#[derive(Debug)]
pub struct NotationFilter {
    patterns: Vec<ExcludePattern>,
}

impl NotationFilter {
    /// Creates a new NotationFilter from raw pattern strings
    ///
    /// # Arguments
    /// * `patterns` - Pattern strings (e.g., "com.example:*", "*:*-debug")
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (length, characters)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Returns only the notations that don't match any exclusion pattern
    pub fn filter_notations(&self, notations: Vec<String>) -> Vec<String> {
        notations
            .into_iter()
            .filter(|notation| !self.matches(naming_key(notation)))
            .collect()
    }

    fn matches(&self, key: &str) -> bool {
        // Every pattern is checked so each one records whether it matched
        self.patterns
            .iter()
            .fold(false, |matched, p| p.matches(key) || matched)
    }

    /// Returns the patterns that did not match any notation
    ///
    /// Call after filtering to find patterns that had no effect.
    pub fn get_unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !*p.matched.borrow())
            .map(|p| p.original.clone())
            .collect()
    }
}

/// `group:artifact` part of a notation, without version or classifier
fn naming_key(notation: &str) -> &str {
    let trimmed = notation.trim();
    match trimmed.match_indices(':').nth(1) {
        Some((index, _)) => &trimmed[..index],
        None => trimmed,
    }
}

/// Represents a single exclusion pattern with its compiled matcher
#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: PatternMatcher,
    matched: RefCell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;

        let matcher = compile_pattern(&pattern);

        Ok(Self {
            original: pattern,
            matcher,
            matched: RefCell::new(false),
        })
    }

    fn matches(&self, key: &str) -> bool {
        let is_match = self.matcher.matches(key);
        if is_match {
            *self.matched.borrow_mut() = true;
        }
        is_match
    }
}

/// Pattern matcher types for efficient matching
#[derive(Debug)]
enum PatternMatcher {
    /// Exact match: "group:artifact"
    Exact(String),
    /// Leading wildcard: "*-suffix"
    EndsWith(String),
    /// Trailing wildcard: "com.example.*"
    StartsWith(String),
    /// Wildcards on both ends: "*middle*"
    Contains(String),
    /// Anchored parts in order: "com.*:*-core"
    Parts {
        anchored_start: bool,
        anchored_end: bool,
        parts: Vec<String>,
    },
}

impl PatternMatcher {
    fn matches(&self, key: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => key == s,
            PatternMatcher::EndsWith(suffix) => key.ends_with(suffix),
            PatternMatcher::StartsWith(prefix) => key.starts_with(prefix),
            PatternMatcher::Contains(middle) => key.contains(middle),
            PatternMatcher::Parts {
                anchored_start,
                anchored_end,
                parts,
            } => {
                let mut rest = key;
                for (index, part) in parts.iter().enumerate() {
                    let is_first = index == 0;
                    let is_last = index == parts.len() - 1;

                    if is_first && *anchored_start {
                        match rest.strip_prefix(part.as_str()) {
                            Some(stripped) => rest = stripped,
                            None => return false,
                        }
                    } else if is_last && *anchored_end {
                        return rest.ends_with(part.as_str());
                    } else {
                        match rest.find(part.as_str()) {
                            Some(pos) => rest = &rest[pos + part.len()..],
                            None => return false,
                        }
                    }
                }
                !*anchored_end || rest.is_empty()
            }
        }
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    for ch in pattern.chars() {
        if !is_valid_pattern_char(ch) {
            anyhow::bail!(
                "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
                 Only alphanumeric, hyphens, underscores, dots, colons, and asterisks (*) are allowed.",
                ch,
                pattern
            );
        }
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || c == '.' || c == ':' || c == '*'
}

fn compile_pattern(pattern: &str) -> PatternMatcher {
    let parts: Vec<String> = pattern
        .split('*')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();
    let anchored_start = !pattern.starts_with('*');
    let anchored_end = !pattern.ends_with('*');

    match (parts.len(), anchored_start, anchored_end) {
        (1, true, true) => PatternMatcher::Exact(pattern.to_string()),
        (1, false, true) => PatternMatcher::EndsWith(parts[0].clone()),
        (1, true, false) => PatternMatcher::StartsWith(parts[0].clone()),
        (1, false, false) => PatternMatcher::Contains(parts[0].clone()),
        _ => PatternMatcher::Parts {
            anchored_start,
            anchored_end,
            parts,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notations(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match() {
        let filter = NotationFilter::new(vec!["com.example:lib".to_string()]).unwrap();
        assert!(filter.matches("com.example:lib"));
        assert!(!filter.matches("com.example:lib-extra"));
        assert!(!filter.matches("org.com.example:lib"));
    }

    #[test]
    fn test_leading_wildcard() {
        let filter = NotationFilter::new(vec!["*-debug".to_string()]).unwrap();
        assert!(filter.matches("com.example:lib-debug"));
        assert!(!filter.matches("com.example:debug-tools"));
    }

    #[test]
    fn test_trailing_wildcard() {
        let filter = NotationFilter::new(vec!["com.google.*".to_string()]).unwrap();
        assert!(filter.matches("com.google.dagger:dagger"));
        assert!(!filter.matches("com.googlex:lib"));
        assert!(!filter.matches("org.com.google.x:y"));
    }

    #[test]
    fn test_contains_wildcard() {
        let filter = NotationFilter::new(vec!["*test*".to_string()]).unwrap();
        assert!(filter.matches("junit:junit-test-utils"));
        assert!(filter.matches("org.testng:testng"));
        assert!(!filter.matches("org.junit:junit"));
    }

    #[test]
    fn test_anchored_parts() {
        let filter = NotationFilter::new(vec!["androidx.*:*-ktx".to_string()]).unwrap();
        assert!(filter.matches("androidx.core:core-ktx"));
        assert!(!filter.matches("androidx.core:core-ktx-extra"));
        assert!(!filter.matches("com.androidx.core:core-ktx"));

        let filter = NotationFilter::new(vec!["org.*:kotlin*".to_string()]).unwrap();
        assert!(filter.matches("org.jetbrains.kotlin:kotlin-stdlib"));
        assert!(!filter.matches("org.jetbrains:annotations"));
    }

    #[test]
    fn test_version_suffix_is_ignored() {
        let filter = NotationFilter::new(vec!["*:okio".to_string()]).unwrap();
        let filtered = filter.filter_notations(notations(&[
            "com.squareup.okio:okio:3.9.0",
            "com.squareup.okhttp3:okhttp:4.12.0",
        ]));
        assert_eq!(filtered, notations(&["com.squareup.okhttp3:okhttp:4.12.0"]));
    }

    #[test]
    fn test_pattern_validation_too_long() {
        let result = NotationFilter::new(vec!["a".repeat(256)]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too long"));

        assert!(NotationFilter::new(vec!["a".repeat(255)]).is_ok());
    }

    #[test]
    fn test_pattern_validation_invalid_chars() {
        let result = NotationFilter::new(vec!["com.example@lib".to_string()]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("invalid character"));
    }

    #[test]
    fn test_pattern_validation_empty() {
        let result = NotationFilter::new(vec!["".to_string()]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_pattern_validation_only_wildcards() {
        let result = NotationFilter::new(vec!["***".to_string()]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("cannot contain only wildcards"));
    }

    #[test]
    fn test_pattern_count_boundary() {
        let patterns: Vec<String> = (0..64).map(|i| format!("pattern{}", i)).collect();
        assert!(NotationFilter::new(patterns).is_ok());

        let patterns: Vec<String> = (0..65).map(|i| format!("pattern{}", i)).collect();
        let result = NotationFilter::new(patterns);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Too many"));
    }

    #[test]
    fn test_empty_pattern_list() {
        let filter = NotationFilter::new(vec![]).unwrap();
        let input = notations(&["a:b", "c:d"]);
        assert_eq!(filter.filter_notations(input.clone()), input);
    }

    #[test]
    fn test_unmatched_patterns() {
        let filter = NotationFilter::new(vec![
            "com.example:*".to_string(),
            "*:never".to_string(),
            "com.*".to_string(),
        ])
        .unwrap();
        let filtered = filter.filter_notations(notations(&["com.example:lib", "org.other:lib"]));

        assert_eq!(filtered, notations(&["org.other:lib"]));
        // Overlapping patterns both count as matched
        assert_eq!(filter.get_unmatched_patterns(), vec!["*:never".to_string()]);
    }

    #[test]
    fn test_case_sensitive_matching() {
        let filter = NotationFilter::new(vec!["Com.Example:*".to_string()]).unwrap();
        assert!(filter.matches("Com.Example:lib"));
        assert!(!filter.matches("com.example:lib"));
    }
}
