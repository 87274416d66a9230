use crate::dependency_mapping::domain::{DepFormatter, DependencyMeta, DependencyTree, Notation};
use crate::shared::error::MapperError;
use crate::shared::Result;
use std::collections::HashMap;

/// A notation dropped while building the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedNotation {
    pub notation: String,
    pub reason: String,
}

/// A notation replaced by a later one formatting to the same path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverwrittenNotation {
    pub path: String,
    pub previous: String,
    pub current: String,
}

/// Everything the builder skipped or replaced, in feed order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub rejected: Vec<RejectedNotation>,
    pub overwritten: Vec<OverwrittenNotation>,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.overwritten.is_empty()
    }
}

#[derive(Debug)]
struct Node {
    name: String,
    notation: Option<String>,
    shadowed: Vec<String>,
    children: Vec<usize>,
}

/// DependencyTreeBuilder merges notations into a prefix tree
///
/// Nodes live in an arena and are addressed by index. `index` maps the
/// dotted path seen so far (`Com.Squareup`) to its node, so notations
/// sharing a prefix share the same ancestors.
///
/// ```text
/// androidx.compose.ui:ui              Androidx
/// androidx.compose.material:material    └─ Compose
///                                          ├─ Material = "androidx.compose.material:material"
///                                          └─ Ui = "androidx.compose.ui:ui"
/// ```
#[derive(Debug)]
pub struct DependencyTreeBuilder<'a> {
    formatter: &'a DepFormatter,
    nodes: Vec<Node>,
    roots: Vec<usize>,
    index: HashMap<String, usize>,
    report: BuildReport,
}

impl<'a> DependencyTreeBuilder<'a> {
    pub fn new(formatter: &'a DepFormatter) -> Self {
        Self {
            formatter,
            nodes: Vec::new(),
            roots: Vec::new(),
            index: HashMap::new(),
            report: BuildReport::default(),
        }
    }

    /// Validates, formats and inserts a single notation
    ///
    /// # Errors
    /// Returns `MapperError::InvalidNotation` if the notation is malformed
    /// or formats to an empty name. The tree is left untouched in that case.
    pub fn add(&mut self, raw: &str) -> Result<()> {
        let notation = Notation::parse(raw)?;
        let path = self.formatter.format(notation.as_str())?;

        let id = self.ensure_path(&path);
        self.mark_dependency(id, &path, notation.as_str());
        Ok(())
    }

    /// Inserts every notation, collecting the invalid ones in the report
    pub fn add_all<I, S>(&mut self, notations: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in notations {
            let raw = raw.as_ref();
            if let Err(e) = self.add(raw) {
                let reason = match e.downcast_ref::<MapperError>() {
                    Some(MapperError::InvalidNotation { reason, .. }) => reason.clone(),
                    _ => e.to_string(),
                };
                self.report.rejected.push(RejectedNotation {
                    notation: raw.trim().to_string(),
                    reason,
                });
            }
        }
    }

    /// Returns the node for `path`, creating missing namespace nodes on the way
    fn ensure_path(&mut self, path: &str) -> usize {
        let mut parent: Option<usize> = None;
        let mut key = String::with_capacity(path.len());

        for segment in path.split('.') {
            if !key.is_empty() {
                key.push('.');
            }
            key.push_str(segment);

            let id = match self.index.get(&key) {
                Some(&id) => id,
                None => {
                    let id = self.nodes.len();
                    self.nodes.push(Node {
                        name: segment.to_string(),
                        notation: None,
                        shadowed: Vec::new(),
                        children: Vec::new(),
                    });
                    match parent {
                        Some(parent) => self.nodes[parent].children.push(id),
                        None => self.roots.push(id),
                    }
                    self.index.insert(key.clone(), id);
                    id
                }
            };
            parent = Some(id);
        }

        // A formatted path always has at least one segment
        parent.unwrap_or_default()
    }

    /// Marks a node as a dependency, even if it was created as a namespace
    fn mark_dependency(&mut self, id: usize, path: &str, notation: &str) {
        let node = &mut self.nodes[id];
        match node.notation.replace(notation.to_string()) {
            Some(previous) if previous != notation => {
                self.report.overwritten.push(OverwrittenNotation {
                    path: path.to_string(),
                    previous: previous.clone(),
                    current: notation.to_string(),
                });
                node.shadowed.push(previous);
            }
            _ => {}
        }
    }

    /// Freezes the arena into an immutable tree
    pub fn finish(self) -> (DependencyTree, BuildReport) {
        let roots = self
            .roots
            .iter()
            .map(|&id| self.materialize(id))
            .collect();
        (DependencyTree::new(roots), self.report)
    }

    fn materialize(&self, id: usize) -> DependencyMeta {
        let node = &self.nodes[id];
        let children = node
            .children
            .iter()
            .map(|&child| self.materialize(child))
            .collect();
        DependencyMeta::new(node.name.clone(), node.notation.clone(), children)
            .with_shadowed(node.shadowed.clone())
    }
}

/// Builds a dependency tree in one call, skipping invalid notations
pub fn build<I, S>(notations: I, formatter: &DepFormatter) -> DependencyTree
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = DependencyTreeBuilder::new(formatter);
    builder.add_all(notations);
    builder.finish().0
}
