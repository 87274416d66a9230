use crate::shared::Result;

/// Maximum length of a group id placed in a request URL
const MAX_GROUP_LENGTH: usize = 255;

/// Validates a Maven group id before it is used to build a request URL
///
/// Security: prevents URL and query injection. Only ASCII letters, digits,
/// dots, hyphens and underscores are accepted.
pub(super) fn validate_group(group: &str) -> Result<()> {
    if group.is_empty() {
        anyhow::bail!("Group cannot be empty");
    }

    if group.len() > MAX_GROUP_LENGTH {
        anyhow::bail!(
            "Security: Group is too long ({} bytes). Maximum allowed: {} bytes",
            group.len(),
            MAX_GROUP_LENGTH
        );
    }

    if group.contains("..") || group.starts_with('.') || group.ends_with('.') {
        anyhow::bail!("Security: Group `{}` contains an empty segment", group);
    }

    if let Some(c) = group
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')))
    {
        anyhow::bail!(
            "Security: Group `{}` contains URL-unsafe character '{}'",
            group,
            c
        );
    }

    Ok(())
}
