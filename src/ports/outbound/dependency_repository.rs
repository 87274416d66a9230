use crate::shared::Result;
use async_trait::async_trait;

/// Upper bound on pages followed for one query
pub const MAX_FETCH_PAGES: u32 = 50;

/// A remote group to list, optionally including its sub-groups
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchQuery {
    pub group: String,
    pub recursive: bool,
}

impl FetchQuery {
    pub fn new(group: impl Into<String>, recursive: bool) -> Self {
        Self {
            group: group.into(),
            recursive,
        }
    }
}

/// One page of notations returned by a repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchPage {
    pub notations: Vec<String>,
    /// Cursor for the next page, `None` when the listing is complete
    pub next_page: Option<u32>,
}

impl FetchPage {
    pub fn last(notations: Vec<String>) -> Self {
        Self {
            notations,
            next_page: None,
        }
    }
}

/// DependencyRepository port for listing the notations published under a group
///
/// This port abstracts the remote source (e.g., Maven Central search API,
/// Google's Maven index) used to discover dependencies.
///
/// # Async Support
/// All methods are async so several groups can be fetched concurrently.
/// Implementations must be `Send + Sync` to support concurrent access.
#[async_trait]
pub trait DependencyRepository: Send + Sync {
    /// Human-readable repository name used in messages
    fn name(&self) -> &str;

    /// Fetches one page of notations for `query`
    ///
    /// # Arguments
    /// * `query` - Group to list
    /// * `page` - Zero-based page cursor
    ///
    /// # Errors
    /// Returns an error if:
    /// - The group is not safe to place in a URL
    /// - The network request fails
    /// - The response cannot be parsed
    async fn fetch_page(&self, query: &FetchQuery, page: u32) -> Result<FetchPage>;

    /// Fetches every page for `query`, following cursors up to `MAX_FETCH_PAGES`
    async fn fetch_all(&self, query: &FetchQuery) -> Result<Vec<String>> {
        let mut notations = Vec::new();
        let mut page = 0;

        for _ in 0..MAX_FETCH_PAGES {
            let fetched = self.fetch_page(query, page).await?;
            notations.extend(fetched.notations);
            match fetched.next_page {
                Some(next) if next > page => page = next,
                _ => break,
            }
        }

        Ok(notations)
    }
}
