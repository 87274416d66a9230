use serde::Serialize;
use std::collections::BTreeMap;

/// A node of the dependency prefix tree
///
/// A node is a namespace (it has children), a dependency (it carries the
/// original notation), or both at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyMeta {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    notation: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<DependencyMeta>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    shadowed: Vec<String>,
}

impl DependencyMeta {
    /// Creates a node. Children are kept sorted by name.
    pub fn new(name: String, notation: Option<String>, mut children: Vec<DependencyMeta>) -> Self {
        children.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            name,
            notation,
            children,
            shadowed: Vec::new(),
        }
    }

    /// Records notations that occupied this node before the current one
    pub fn with_shadowed(mut self, shadowed: Vec<String>) -> Self {
        self.shadowed = shadowed;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn notation(&self) -> Option<&str> {
        self.notation.as_deref()
    }

    pub fn children(&self) -> &[DependencyMeta] {
        &self.children
    }

    /// Notations replaced by a later notation formatting to the same path
    pub fn shadowed(&self) -> &[String] {
        &self.shadowed
    }

    pub fn is_dependency(&self) -> bool {
        self.notation.is_some()
    }

    pub fn child(&self, name: &str) -> Option<&DependencyMeta> {
        self.children
            .binary_search_by(|child| child.name.as_str().cmp(name))
            .ok()
            .map(|index| &self.children[index])
    }

    fn collect_paths(&self, prefix: &str, paths: &mut BTreeMap<String, String>) {
        let path = if prefix.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", prefix, self.name)
        };
        if let Some(notation) = &self.notation {
            paths.insert(path.clone(), notation.clone());
        }
        for child in &self.children {
            child.collect_paths(&path, paths);
        }
    }
}

/// The finished forest of dependency nodes, roots sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyTree {
    roots: Vec<DependencyMeta>,
}

impl DependencyTree {
    pub fn new(mut roots: Vec<DependencyMeta>) -> Self {
        roots.sort_by(|a, b| a.name.cmp(&b.name));
        Self { roots }
    }

    pub fn roots(&self) -> &[DependencyMeta] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Looks up a node by its dotted path (e.g. `Com.Squareup.Okio`)
    pub fn find(&self, path: &str) -> Option<&DependencyMeta> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut node = self.roots.iter().find(|root| root.name == first)?;
        for segment in segments {
            node = node.child(segment)?;
        }
        Some(node)
    }

    /// Every dependency node keyed by its dotted path
    pub fn dependency_paths(&self) -> BTreeMap<String, String> {
        let mut paths = BTreeMap::new();
        for root in &self.roots {
            root.collect_paths("", &mut paths);
        }
        paths
    }

    pub fn dependency_count(&self) -> usize {
        self.dependency_paths().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, notation: &str) -> DependencyMeta {
        DependencyMeta::new(name.to_string(), Some(notation.to_string()), vec![])
    }

    #[test]
    fn test_children_are_sorted() {
        let node = DependencyMeta::new(
            "Com".to_string(),
            None,
            vec![leaf("Zeta", "com:zeta"), leaf("Alpha", "com:alpha")],
        );
        let names: Vec<&str> = node.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
        assert!(node.child("Zeta").is_some());
        assert!(node.child("Missing").is_none());
    }

    #[test]
    fn test_find_and_dependency_paths() {
        let dagger = DependencyMeta::new(
            "Dagger".to_string(),
            Some("com.google.dagger:dagger".to_string()),
            vec![leaf("Android", "com.google.dagger:dagger-android")],
        );
        let google = DependencyMeta::new("Google".to_string(), None, vec![dagger]);
        let tree = DependencyTree::new(vec![DependencyMeta::new(
            "Com".to_string(),
            None,
            vec![google],
        )]);

        let node = tree.find("Com.Google.Dagger").unwrap();
        assert_eq!(node.notation(), Some("com.google.dagger:dagger"));
        assert_eq!(node.children().len(), 1);
        assert!(tree.find("Com.Google.Guava").is_none());
        assert!(!tree.find("Com").unwrap().is_dependency());

        let paths = tree.dependency_paths();
        assert_eq!(paths.len(), 2);
        assert_eq!(
            paths.get("Com.Google.Dagger.Android").map(String::as_str),
            Some("com.google.dagger:dagger-android")
        );
        assert_eq!(tree.dependency_count(), 2);
    }

    #[test]
    fn test_empty_tree() {
        let tree = DependencyTree::default();
        assert!(tree.is_empty());
        assert!(tree.find("Anything").is_none());
        assert!(tree.dependency_paths().is_empty());
    }

    #[test]
    fn test_shadowed_notations() {
        let node = leaf("Core", "b:core").with_shadowed(vec!["a:core".to_string()]);
        assert_eq!(node.shadowed(), &["a:core".to_string()]);
    }
}
