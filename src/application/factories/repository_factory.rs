use crate::adapters::outbound::network::{
    CachingDependencyRepository, GoogleMavenClient, MavenCentralClient,
};
use crate::application::dto::RepositoryKind;
use crate::ports::outbound::DependencyRepository;
use crate::shared::Result;
use std::sync::Arc;

/// Factory for creating remote dependency repositories
///
/// Every repository is wrapped in the caching decorator, so overlapping
/// queries within one run reach the network once.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Creates a shared repository for the given kind
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn create(kind: RepositoryKind) -> Result<Arc<dyn DependencyRepository>> {
        Ok(match kind {
            RepositoryKind::MavenCentral => {
                Arc::new(CachingDependencyRepository::new(MavenCentralClient::new()?))
            }
            RepositoryKind::Google => {
                Arc::new(CachingDependencyRepository::new(GoogleMavenClient::new()?))
            }
        })
    }

    /// Creates one repository per distinct kind, keeping first-seen order
    pub fn create_all(kinds: &[RepositoryKind]) -> Result<Vec<Arc<dyn DependencyRepository>>> {
        let mut seen = Vec::new();
        for kind in kinds {
            if !seen.contains(kind) {
                seen.push(*kind);
            }
        }
        seen.into_iter().map(Self::create).collect()
    }
}
