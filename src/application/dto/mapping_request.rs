use crate::dependency_mapping::domain::DepFormatter;
use crate::dependency_mapping::services::CollisionPolicy;
use crate::ports::outbound::FetchQuery;

/// Root class name used when none is configured
pub const DEFAULT_ROOT_CLASS_NAME: &str = "Libs";

/// A dependency placed at an explicit path instead of its formatted one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitMapping {
    pub notation: String,
    /// Dotted path below the root class, e.g. `Compose.Ui`
    pub path: String,
}

impl ExplicitMapping {
    pub fn new(notation: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            notation: notation.into(),
            path: path.into(),
        }
    }
}

/// MappingRequest - Internal request DTO for the mapping use case
///
/// Everything the use case needs: literal and remote inputs, the naming
/// strategies, and how to handle collisions and fetch failures.
#[derive(Debug, Clone)]
pub struct MappingRequest {
    /// Name of the outermost generated class
    pub root_class_name: String,
    /// Literal notations, used as given
    pub dependencies: Vec<String>,
    /// Remote groups fetched from every configured repository
    pub remote_groups: Vec<FetchQuery>,
    /// Dependencies mapped to explicit paths
    pub mappings: Vec<ExplicitMapping>,
    /// Patterns for excluding notations from the tree
    pub exclude_patterns: Vec<String>,
    pub formatter: DepFormatter,
    pub collision_policy: CollisionPolicy,
    /// Turn fetch failures into errors instead of warnings
    pub fail_on_fetch_error: bool,
}

impl MappingRequest {
    pub fn new(root_class_name: impl Into<String>) -> Self {
        Self {
            root_class_name: root_class_name.into(),
            dependencies: Vec::new(),
            remote_groups: Vec::new(),
            mappings: Vec::new(),
            exclude_patterns: Vec::new(),
            formatter: DepFormatter::default(),
            collision_policy: CollisionPolicy::default(),
            fail_on_fetch_error: false,
        }
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies.extend(dependencies.into_iter().map(Into::into));
        self
    }

    pub fn with_remote_group(mut self, group: impl Into<String>, recursive: bool) -> Self {
        self.remote_groups.push(FetchQuery::new(group, recursive));
        self
    }

    pub fn with_mapping(mut self, notation: impl Into<String>, path: impl Into<String>) -> Self {
        self.mappings.push(ExplicitMapping::new(notation, path));
        self
    }

    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    pub fn with_formatter(mut self, formatter: DepFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    pub fn with_fail_on_fetch_error(mut self, fail: bool) -> Self {
        self.fail_on_fetch_error = fail;
        self
    }
}

impl Default for MappingRequest {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_CLASS_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = MappingRequest::default();
        assert_eq!(request.root_class_name, "Libs");
        assert!(request.dependencies.is_empty());
        assert_eq!(request.collision_policy, CollisionPolicy::Fail);
        assert!(!request.fail_on_fetch_error);
    }

    #[test]
    fn test_builder_methods() {
        let request = MappingRequest::new("Deps")
            .with_dependencies(["a:b", "c:d"])
            .with_remote_group("com.squareup", true)
            .with_mapping("androidx.compose.ui:ui", "Compose.Ui")
            .with_collision_policy(CollisionPolicy::LastWriteWins)
            .with_fail_on_fetch_error(true);

        assert_eq!(request.root_class_name, "Deps");
        assert_eq!(request.dependencies, vec!["a:b", "c:d"]);
        assert_eq!(request.remote_groups, vec![FetchQuery::new("com.squareup", true)]);
        assert_eq!(request.mappings[0].path, "Compose.Ui");
        assert_eq!(request.collision_policy, CollisionPolicy::LastWriteWins);
        assert!(request.fail_on_fetch_error);
    }
}
