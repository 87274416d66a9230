use crate::dependency_mapping::domain::{ClassSpec, DependencyMeta, DependencyTree, FieldSpec, Notation};
use crate::shared::error::MapperError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// What to do with a node whose path was claimed by more than one notation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Report the collision as `DuplicateFieldName`
    #[default]
    Fail,
    /// Keep the notation that came last in feed order
    LastWriteWins,
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(CollisionPolicy::Fail),
            "last-write-wins" => Ok(CollisionPolicy::LastWriteWins),
            _ => Err(format!(
                "Invalid collision policy: {}. Valid values are: fail, last-write-wins",
                s
            )),
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionPolicy::Fail => write!(f, "fail"),
            CollisionPolicy::LastWriteWins => write!(f, "last-write-wins"),
        }
    }
}

/// ClassWriter emits a nested class hierarchy mirroring a dependency tree
///
/// Every tree node with children becomes an inner class, every node with a
/// notation becomes a `String` field on its parent class. A node that is
/// both produces a field and an inner class of the same name.
#[derive(Debug)]
pub struct ClassWriter {
    name: String,
    qualified_name: String,
    policy: CollisionPolicy,
    fields: BTreeMap<String, String>,
    inner_classes: BTreeMap<String, ClassWriter>,
}

impl ClassWriter {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            qualified_name: name.clone(),
            name,
            policy: CollisionPolicy::default(),
            fields: BTreeMap::new(),
            inner_classes: BTreeMap::new(),
        }
    }

    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Defines a field on this class
    ///
    /// Defining the same field twice with the same value is a no-op.
    ///
    /// # Errors
    /// Returns `MapperError::DuplicateFieldName` if the field already holds
    /// a different value.
    pub fn field(&mut self, name: &str, value: &str) -> Result<()> {
        match self.fields.get(name) {
            Some(existing) if existing == value => Ok(()),
            Some(existing) => Err(MapperError::DuplicateFieldName {
                container: self.qualified_name.clone(),
                name: name.to_string(),
                existing: existing.clone(),
                incoming: value.to_string(),
            }
            .into()),
            None => {
                self.fields.insert(name.to_string(), value.to_string());
                Ok(())
            }
        }
    }

    /// Returns the inner class `name`, creating it on first use
    pub fn inner_class(&mut self, name: &str) -> &mut ClassWriter {
        let qualified_name = format!("{}${}", self.qualified_name, name);
        let policy = self.policy;
        self.inner_classes
            .entry(name.to_string())
            .or_insert_with(|| ClassWriter {
                name: name.to_string(),
                qualified_name,
                policy,
                fields: BTreeMap::new(),
                inner_classes: BTreeMap::new(),
            })
    }

    /// Adds a tree node and, recursively, all of its children
    pub fn add(&mut self, meta: &DependencyMeta) -> Result<()> {
        if !meta.children().is_empty() {
            let inner = self.inner_class(meta.name());
            for child in meta.children() {
                inner.add(child)?;
            }
        }

        if let Some(notation) = meta.notation() {
            if let (CollisionPolicy::Fail, Some(previous)) =
                (self.policy, meta.shadowed().last())
            {
                return Err(MapperError::DuplicateFieldName {
                    container: self.qualified_name.clone(),
                    name: meta.name().to_string(),
                    existing: previous.clone(),
                    incoming: notation.to_string(),
                }
                .into());
            }
            self.field(meta.name(), notation)?;
        }

        Ok(())
    }

    /// Adds every root of a tree
    pub fn add_tree(&mut self, tree: &DependencyTree) -> Result<()> {
        for root in tree.roots() {
            self.add(root)?;
        }
        Ok(())
    }

    /// Places a dependency at an explicit dotted path (e.g. `Compose.Ui`)
    ///
    /// Inner classes along the path are created as needed and the last
    /// segment becomes the field name.
    pub fn map(&mut self, notation: &str, mapped_path: &str) -> Result<()> {
        let notation = Notation::parse(notation)?;
        let segments: Vec<&str> = mapped_path.split('.').collect();
        let invalid = segments.iter().find(|s| !is_valid_member_name(s));

        let (Some((field, classes)), None) = (segments.split_last(), invalid) else {
            return Err(MapperError::Validation {
                message: format!(
                    "Invalid mapped path `{}` for `{}`: every segment must be a valid name",
                    mapped_path, notation
                ),
            }
            .into());
        };

        let mut class = self;
        for name in classes {
            class = class.inner_class(name);
        }
        class.field(field, notation.as_str())
    }

    /// Finalizes the hierarchy
    pub fn make(self) -> ClassSpec {
        ClassSpec {
            name: self.name,
            qualified_name: self.qualified_name,
            fields: self
                .fields
                .into_iter()
                .map(|(name, value)| FieldSpec { name, value })
                .collect(),
            inner_classes: self
                .inner_classes
                .into_values()
                .map(ClassWriter::make)
                .collect(),
        }
    }
}

fn is_valid_member_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
