use crate::ports::outbound::{DependencyRepository, FetchPage, FetchQuery};
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Cache key for one fetched page
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    query: FetchQuery,
    page: u32,
}

impl CacheKey {
    fn new(query: &FetchQuery, page: u32) -> Self {
        Self {
            query: query.clone(),
            page,
        }
    }
}

/// CachingDependencyRepository wraps a DependencyRepository and adds in-memory caching.
///
/// This adapter implements the decorator pattern to add caching capability
/// to any DependencyRepository implementation. The cache is thread-safe and
/// suitable for concurrent access, so the same group requested twice in one
/// run (or by overlapping recursive queries) hits the network once.
pub struct CachingDependencyRepository<R: DependencyRepository> {
    inner: R,
    cache: Arc<DashMap<CacheKey, FetchPage>>,
}

impl<R: DependencyRepository> CachingDependencyRepository<R> {
    /// Creates a new caching repository wrapping the given inner repository
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// The wrapped repository
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: DependencyRepository> DependencyRepository for CachingDependencyRepository<R> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn fetch_page(&self, query: &FetchQuery, page: u32) -> Result<FetchPage> {
        let key = CacheKey::new(query, page);

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        // Failures are not cached so a later call can retry
        let fetched = self.inner.fetch_page(query, page).await?;
        self.cache.insert(key, fetched.clone());

        Ok(fetched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock repository for testing that tracks call counts
    struct MockRepository {
        call_count: AtomicUsize,
        fail: bool,
    }

    impl MockRepository {
        fn new(fail: bool) -> Self {
            Self {
                call_count: AtomicUsize::new(0),
                fail,
            }
        }

        fn get_call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DependencyRepository for MockRepository {
        fn name(&self) -> &str {
            "mock"
        }

        async fn fetch_page(&self, query: &FetchQuery, page: u32) -> Result<FetchPage> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("network down");
            }
            Ok(FetchPage {
                notations: vec![format!("{}:page-{}", query.group, page)],
                next_page: None,
            })
        }
    }

    #[tokio::test]
    async fn test_caching_repository_returns_cached_value() {
        let caching_repo = CachingDependencyRepository::new(MockRepository::new(false));
        let query = FetchQuery::new("com.squareup", false);

        let first = caching_repo.fetch_page(&query, 0).await.unwrap();
        assert_eq!(first.notations, vec!["com.squareup:page-0"]);
        assert_eq!(caching_repo.inner.get_call_count(), 1);

        let second = caching_repo.fetch_page(&query, 0).await.unwrap();
        assert_eq!(second, first);
        assert_eq!(caching_repo.inner.get_call_count(), 1);
        assert_eq!(caching_repo.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_caching_repository_keys_on_query_and_page() {
        let caching_repo = CachingDependencyRepository::new(MockRepository::new(false));

        caching_repo
            .fetch_page(&FetchQuery::new("com.squareup", false), 0)
            .await
            .unwrap();
        caching_repo
            .fetch_page(&FetchQuery::new("com.squareup", false), 1)
            .await
            .unwrap();
        caching_repo
            .fetch_page(&FetchQuery::new("com.squareup", true), 0)
            .await
            .unwrap();

        assert_eq!(caching_repo.inner.get_call_count(), 3);
        assert_eq!(caching_repo.cache_size(), 3);
    }

    #[tokio::test]
    async fn test_caching_repository_does_not_cache_errors() {
        let caching_repo = CachingDependencyRepository::new(MockRepository::new(true));
        let query = FetchQuery::new("com.squareup", false);

        assert!(caching_repo.fetch_page(&query, 0).await.is_err());
        assert!(caching_repo.fetch_page(&query, 0).await.is_err());
        assert_eq!(caching_repo.inner.get_call_count(), 2);
        assert_eq!(caching_repo.cache_size(), 0);
    }

    #[test]
    fn test_name_is_forwarded() {
        let caching_repo = CachingDependencyRepository::new(MockRepository::new(false));
        assert_eq!(caching_repo.name(), "mock");
    }
}
