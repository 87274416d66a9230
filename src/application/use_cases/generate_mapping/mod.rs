use crate::application::dto::{MappingRequest, MappingResponse, MappingStats};
use crate::dependency_mapping::domain::DependencyTree;
use crate::dependency_mapping::services::{
    BuildReport, ClassWriter, CollisionPolicy, DependencyTreeBuilder, NotationFilter,
};
use crate::ports::outbound::{DependencyRepository, FetchQuery, ProgressReporter};
use crate::shared::error::MapperError;
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::sync::Arc;

/// Maximum number of remote queries in flight at the same time
pub const MAX_CONCURRENT_FETCHES: usize = 4;

/// Notations gathered from every remote query, in query order
struct FetchOutcome {
    notations: Vec<String>,
    failures: usize,
}

/// GenerateMappingUseCase - Core use case for mapping dependencies to a class hierarchy
///
/// This use case orchestrates the whole pipeline:
/// collect notations, fetch remote groups, filter, build the prefix tree,
/// then emit the nested class description.
///
/// Nothing is written here. Callers render and persist the returned
/// `ClassSpec` once `execute` succeeded.
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct GenerateMappingUseCase<PR> {
    repositories: Vec<Arc<dyn DependencyRepository>>,
    progress_reporter: PR,
}

impl<PR> GenerateMappingUseCase<PR>
where
    PR: ProgressReporter,
{
    /// Creates a new GenerateMappingUseCase with injected dependencies
    ///
    /// # Arguments
    /// * `repositories` - Remote sources queried for every remote group
    /// * `progress_reporter` - Reporter for user feedback and warnings
    pub fn new(repositories: Vec<Arc<dyn DependencyRepository>>, progress_reporter: PR) -> Self {
        Self {
            repositories,
            progress_reporter,
        }
    }

    /// Executes the mapping
    ///
    /// # Arguments
    /// * `request` - Mapping request containing inputs and naming strategies
    ///
    /// # Returns
    /// MappingResponse containing the class hierarchy, the tree and run statistics
    pub async fn execute(&self, request: MappingRequest) -> Result<MappingResponse> {
        // Step 1: Validate the request
        self.validate_request(&request)?;

        let mut stats = MappingStats {
            literal: request.dependencies.len(),
            ..MappingStats::default()
        };

        // Step 2: Literal dependencies first, then remote ones in query order
        let mut notations = request.dependencies.clone();
        if !request.remote_groups.is_empty() {
            let outcome = self
                .fetch_remote_groups(&request.remote_groups, request.fail_on_fetch_error)
                .await?;
            stats.fetched = outcome.notations.len();
            stats.fetch_failures = outcome.failures;
            notations.extend(outcome.notations);
        }

        // Step 3: Apply exclude patterns
        let before_filter = notations.len();
        let notations = self.apply_exclusion_filters(notations, &request.exclude_patterns)?;
        stats.excluded = before_filter - notations.len();

        // Step 4: Build the prefix tree
        let mut builder = DependencyTreeBuilder::new(&request.formatter);
        builder.add_all(&notations);
        let (tree, report) = builder.finish();
        self.report_build_issues(&report, request.collision_policy);
        stats.rejected = report.rejected.len();
        stats.overwritten = report.overwritten.len();

        // Step 5: Emit the class hierarchy and apply explicit mappings
        let class_spec = {
            let mut writer = ClassWriter::new(request.root_class_name.as_str())
                .with_collision_policy(request.collision_policy);
            writer.add_tree(&tree)?;
            for mapping in &request.mappings {
                writer.map(&mapping.notation, &mapping.path)?;
            }
            writer.make()
        };
        stats.mapped = request.mappings.len();
        stats.fields = class_spec.field_count();

        // Step 6: Build response
        self.report_summary(&tree, &stats);
        Ok(MappingResponse::new(class_spec, tree, stats))
    }

    fn validate_request(&self, request: &MappingRequest) -> Result<()> {
        let root = request.root_class_name.as_str();
        let valid_root = !root.is_empty()
            && !root.starts_with(|c: char| c.is_ascii_digit())
            && root.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_root {
            return Err(MapperError::Validation {
                message: format!(
                    "Invalid root class name `{}`: use letters, digits and `_`, not starting with a digit",
                    root
                ),
            }
            .into());
        }

        if !request.remote_groups.is_empty() && self.repositories.is_empty() {
            return Err(MapperError::Validation {
                message: "Remote groups were requested but no repository is configured".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Fetches every (query, repository) pair with bounded concurrency
    ///
    /// `buffered` yields results in submission order, so the merged feed
    /// is stable regardless of which request finishes first.
    async fn fetch_remote_groups(
        &self,
        queries: &[FetchQuery],
        fail_on_fetch_error: bool,
    ) -> Result<FetchOutcome> {
        let jobs: Vec<(FetchQuery, Arc<dyn DependencyRepository>)> = queries
            .iter()
            .flat_map(|query| {
                self.repositories
                    .iter()
                    .map(move |repository| (query.clone(), Arc::clone(repository)))
            })
            .collect();
        let total = jobs.len();

        self.progress_reporter.report(&format!(
            "🔍 Fetching {} remote group(s) from {} repository(ies)...",
            queries.len(),
            self.repositories.len()
        ));

        let mut results = stream::iter(jobs)
            .map(|(query, repository)| async move {
                let result = repository.fetch_all(&query).await;
                (query, repository, result)
            })
            .buffered(MAX_CONCURRENT_FETCHES);

        let mut outcome = FetchOutcome {
            notations: Vec::new(),
            failures: 0,
        };
        let mut done = 0;

        while let Some((query, repository, result)) = results.next().await {
            done += 1;
            self.progress_reporter
                .report_progress(done, total, Some(query.group.as_str()));

            match result {
                Ok(fetched) => outcome.notations.extend(fetched),
                Err(e) if fail_on_fetch_error => {
                    return Err(MapperError::FetchFailure {
                        repository: repository.name().to_string(),
                        group: query.group,
                        details: format!("{:#}", e),
                    }
                    .into());
                }
                Err(e) => {
                    outcome.failures += 1;
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Failed to fetch '{}' from {}: {:#}",
                        query.group,
                        repository.name(),
                        e
                    ));
                }
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Fetched {} notation(s) ({} of {} request(s) failed)",
            outcome.notations.len(),
            outcome.failures,
            total
        ));

        Ok(outcome)
    }

    /// Applies exclusion filters to notations
    ///
    /// Returns the notations that don't match any exclusion pattern.
    /// Warns about patterns that matched nothing.
    fn apply_exclusion_filters(
        &self,
        notations: Vec<String>,
        exclude_patterns: &[String],
    ) -> Result<Vec<String>> {
        if exclude_patterns.is_empty() {
            return Ok(notations);
        }

        let filter = NotationFilter::new(exclude_patterns.to_vec())?;
        let original_count = notations.len();
        let filtered = filter.filter_notations(notations);
        let excluded_count = original_count - filtered.len();

        for pattern in filter.get_unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any dependencies.",
                pattern
            ));
        }

        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} dependency(ies) based on filters",
                excluded_count
            ));
        }

        Ok(filtered)
    }

    fn report_build_issues(&self, report: &BuildReport, policy: CollisionPolicy) {
        for rejected in &report.rejected {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Skipping invalid notation '{}': {}",
                rejected.notation, rejected.reason
            ));
        }

        // Under the fail policy the emitter turns these into errors
        if policy == CollisionPolicy::LastWriteWins {
            for overwritten in &report.overwritten {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: '{}' replaces '{}' at {}",
                    overwritten.current, overwritten.previous, overwritten.path
                ));
            }
        }
    }

    fn report_summary(&self, tree: &DependencyTree, stats: &MappingStats) {
        if tree.is_empty() && stats.mapped == 0 {
            self.progress_reporter
                .report("ℹ️  No dependencies to map, generating an empty root class");
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Mapped {} dependency(ies) into {} field(s)",
            tree.dependency_count() + stats.mapped,
            stats.fields
        ));
    }
}
