//! Configuration file support for deps-mapper.
//!
//! Provides YAML-based configuration through `deps-mapper.config.yml` files
//! (TOML is accepted for explicitly passed `.toml` files), including data
//! structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::application::dto::{OutputFormat, RepositoryKind};
use crate::dependency_mapping::domain::DepFormatter;
use crate::dependency_mapping::services::CollisionPolicy;
use crate::shared::security::validate_config_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "deps-mapper.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub root_class_name: Option<String>,
    pub format: Option<OutputFormat>,
    pub output_dir: Option<String>,
    pub file_name: Option<String>,
    pub java_package: Option<String>,
    pub collision_policy: Option<CollisionPolicy>,
    pub fail_on_fetch_error: Option<bool>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Notation to dotted path below the root class.
    #[serde(default)]
    pub mappings: BTreeMap<String, String>,
    pub remote: Option<RemoteConfig>,
    #[serde(default)]
    pub exclude: Vec<String>,
    pub formatting: Option<FormattingConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Remote groups and the repositories they are listed from.
#[derive(Debug, Deserialize, Default)]
pub struct RemoteConfig {
    pub repositories: Option<Vec<RepositoryKind>>,
    #[serde(default)]
    pub groups: Vec<RemoteGroup>,
}

#[derive(Debug, Deserialize)]
pub struct RemoteGroup {
    pub group: String,
    #[serde(default)]
    pub recursive: bool,
}

/// Declarative naming rules, turned into `DepFormatter` strategies.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct FormattingConfig {
    pub capitalize_first_letter: Option<bool>,
    /// Segments that are never capitalized.
    #[serde(default)]
    pub keep_lowercase: Vec<String>,
    /// Substring replacements applied in order to the whole notation.
    #[serde(default)]
    pub notation_replacements: Vec<Replacement>,
    /// Exact-match replacements for single path segments.
    #[serde(default)]
    pub name_replacements: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl FormattingConfig {
    /// Builds the formatter described by these rules
    pub fn to_formatter(&self) -> DepFormatter {
        let mut formatter = DepFormatter::new();

        if !self.notation_replacements.is_empty() {
            let replacements = self.notation_replacements.clone();
            formatter = formatter.with_replace_notation(move |notation| {
                replacements
                    .iter()
                    .fold(notation.to_string(), |acc, r| acc.replace(&r.from, &r.to))
            });
        }

        if !self.name_replacements.is_empty() {
            let names = self.name_replacements.clone();
            formatter = formatter.with_replace_name(move |name| {
                names.get(name).cloned().unwrap_or_else(|| name.to_string())
            });
        }

        let capitalize = self.capitalize_first_letter.unwrap_or(true);
        let keep_lowercase = self.keep_lowercase.clone();
        if !capitalize || !keep_lowercase.is_empty() {
            formatter = formatter.with_capitalize_first_letter(move |segment| {
                capitalize && !keep_lowercase.iter().any(|s| s == segment)
            });
        }

        formatter
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_config_file(path)?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let config: ConfigFile = if is_toml {
        toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid TOML syntax.",
                path.display()
            )
        })?
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(root) = &config.root_class_name {
        if root.trim().is_empty() {
            bail!(
                "Invalid config: root_class_name must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default name \"Libs\"."
            );
        }
    }

    for (notation, path) in &config.mappings {
        if notation.trim().is_empty() || path.trim().is_empty() {
            bail!(
                "Invalid config: mappings entry '{}: {}' must have a notation and a path.\n\n\
                 💡 Hint: Use entries like \"androidx.compose.ui:ui\": \"Compose.Ui\".",
                notation,
                path
            );
        }
    }

    if let Some(remote) = &config.remote {
        for (i, group) in remote.groups.iter().enumerate() {
            if group.group.trim().is_empty() {
                bail!(
                    "Invalid config: remote.groups[{}].group must not be empty.\n\n\
                     💡 Hint: Each remote group needs a Maven group id (e.g., \"androidx.compose\").",
                    i
                );
            }
        }
    }

    if let Some(formatting) = &config.formatting {
        for (i, replacement) in formatting.notation_replacements.iter().enumerate() {
            if replacement.from.is_empty() {
                bail!(
                    "Invalid config: formatting.notation_replacements[{}].from must not be empty.",
                    i
                );
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
