use crate::dependency_mapping::domain::{ClassSpec, DependencyTree};

/// Counters describing one mapping run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingStats {
    /// Literal notations from the request
    pub literal: usize,
    /// Notations returned by remote repositories
    pub fetched: usize,
    /// Notations dropped by exclude patterns
    pub excluded: usize,
    /// Notations dropped as invalid
    pub rejected: usize,
    /// Notations replaced by a later one with the same path
    pub overwritten: usize,
    /// Remote queries that failed
    pub fetch_failures: usize,
    /// Explicit mappings applied
    pub mapped: usize,
    /// Fields in the generated hierarchy
    pub fields: usize,
}

/// MappingResponse - Internal response DTO from the mapping use case
///
/// Adapters render `class_spec` into the requested output format.
#[derive(Debug, Clone)]
pub struct MappingResponse {
    pub class_spec: ClassSpec,
    pub tree: DependencyTree,
    pub stats: MappingStats,
}

impl MappingResponse {
    pub fn new(class_spec: ClassSpec, tree: DependencyTree, stats: MappingStats) -> Self {
        Self {
            class_spec,
            tree,
            stats,
        }
    }
}
