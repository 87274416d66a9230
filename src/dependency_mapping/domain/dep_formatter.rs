use crate::shared::error::MapperError;
use crate::shared::Result;
use std::fmt;
use std::sync::Arc;

/// Rewrites a whole notation or a single path segment
pub type ReplaceFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Decides whether a path segment gets its first letter capitalized
pub type CapitalizePredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// DepFormatter turns a raw notation into the dotted path of generated names
///
/// ```text
/// one.dep.user:core-ext           -> One.Dep.User.Core.Ext
/// foo.bar.gav:bar-gav-core        -> Foo.Bar.Gav.Core
/// ```
///
/// All three strategies must be pure: the same input always yields the same
/// output, otherwise the tree built from the formatted paths is not stable.
#[derive(Clone)]
pub struct DepFormatter {
    replace_notation: ReplaceFn,
    replace_name: ReplaceFn,
    capitalize_first_letter: CapitalizePredicate,
}

impl DepFormatter {
    /// Creates a formatter with identity replacements that capitalizes every segment
    pub fn new() -> Self {
        Self {
            replace_notation: Arc::new(|notation| notation.to_string()),
            replace_name: Arc::new(|name| name.to_string()),
            capitalize_first_letter: Arc::new(|_| true),
        }
    }

    /// Sets the strategy applied to the whole raw notation before anything else
    pub fn with_replace_notation<F>(mut self, replace: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.replace_notation = Arc::new(replace);
        self
    }

    /// Sets the strategy applied to every path segment
    pub fn with_replace_name<F>(mut self, replace: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.replace_name = Arc::new(replace);
        self
    }

    pub fn with_capitalize_first_letter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.capitalize_first_letter = Arc::new(predicate);
        self
    }

    /// Formats a raw notation into a dotted path
    ///
    /// # Errors
    /// Returns `MapperError::InvalidNotation` when nothing is left of the
    /// artifact id after formatting.
    pub fn format(&self, raw: &str) -> Result<String> {
        let normalized = (self.replace_notation)(raw.trim()).replace(['-', '_'], ".");

        let (group, artifact) = match normalized.split_once(':') {
            Some((group, rest)) => (group, rest.split(':').next().unwrap_or_default()),
            None => ("", normalized.as_str()),
        };

        let mut group = self.join_path(group);
        let name = self.join_path(artifact);

        if name.is_empty() {
            return Err(MapperError::invalid_notation(
                raw.trim(),
                "artifact id is empty after formatting",
            )
            .into());
        }

        // foo.bar:foo.bar      -> Foo.Bar
        // foo.bar.gav:gav      -> Foo.Bar.Gav
        // foo.bar.gav:bar-gav  -> Foo.Bar.Gav
        let mut shrinking = name.as_str();
        while !shrinking.is_empty() {
            if shrinking == group {
                group.clear();
                break;
            }
            let kept = group
                .strip_suffix(shrinking)
                .and_then(|rest| rest.strip_suffix('.'))
                .map(str::len);
            if let Some(len) = kept {
                group.truncate(len);
            }
            shrinking = shrinking
                .rfind('.')
                .map(|index| &shrinking[..index])
                .unwrap_or("");
        }

        if group.is_empty() {
            Ok(name)
        } else {
            Ok(format!("{}.{}", group, name))
        }
    }

    /// Formats each segment of a dotted path and joins them back together
    ///
    /// A segment starting with a digit cannot start an identifier, so it is
    /// glued to the previous one with `_`: `Foo.10.20` -> `Foo_10_20`.
    fn join_path(&self, path: &str) -> String {
        let mut joined = String::with_capacity(path.len() + 1);
        let segments = path
            .split('.')
            .map(|segment| self.format_segment(segment))
            .filter(|segment| !segment.is_empty());

        for (index, segment) in segments.enumerate() {
            let starts_with_digit = segment.starts_with(|c: char| c.is_ascii_digit());
            if index == 0 {
                if starts_with_digit {
                    joined.push('_');
                }
            } else {
                joined.push(if starts_with_digit { '_' } else { '.' });
            }
            joined.push_str(&segment);
        }

        joined
    }

    fn format_segment(&self, segment: &str) -> String {
        let replaced = (self.replace_name)(segment);
        let cased = if (self.capitalize_first_letter)(&replaced) {
            capitalize(&replaced)
        } else {
            replaced
        };
        sanitize_identifier(&cased)
    }
}

impl Default for DepFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DepFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepFormatter").finish_non_exhaustive()
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replaces characters that cannot appear in an identifier with `_`
fn sanitize_identifier(segment: &str) -> String {
    segment
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
