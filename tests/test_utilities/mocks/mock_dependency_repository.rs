use deps_mapper::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock DependencyRepository serving canned pages per group
///
/// Groups without pages fail, like an unreachable repository would.
pub struct MockDependencyRepository {
    name: String,
    pages: HashMap<String, Vec<Vec<String>>>,
    calls: AtomicUsize,
}

impl MockDependencyRepository {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            pages: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Serves `notations` as a single page for `group`
    pub fn with_group(self, group: &str, notations: &[&str]) -> Self {
        self.with_pages(group, &[notations])
    }

    /// Serves one page per slice for `group`
    pub fn with_pages(mut self, group: &str, pages: &[&[&str]]) -> Self {
        self.pages.insert(
            group.to_string(),
            pages
                .iter()
                .map(|page| page.iter().map(|n| n.to_string()).collect())
                .collect(),
        );
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl DependencyRepository for MockDependencyRepository {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_page(&self, query: &FetchQuery, page: u32) -> Result<FetchPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let Some(pages) = self.pages.get(&query.group) else {
            anyhow::bail!("{} has no group {}", self.name, query.group);
        };

        let index = page as usize;
        Ok(FetchPage {
            notations: pages.get(index).cloned().unwrap_or_default(),
            next_page: (index + 1 < pages.len()).then_some(page + 1),
        })
    }
}
