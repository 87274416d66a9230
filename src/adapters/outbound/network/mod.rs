/// Network adapters for remote dependency repositories
mod caching_repository;
mod google_maven_client;
mod group_validation;
mod maven_central_client;

pub use caching_repository::CachingDependencyRepository;
pub use google_maven_client::GoogleMavenClient;
pub use maven_central_client::MavenCentralClient;
