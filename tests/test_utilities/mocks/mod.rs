/// Mock implementations for testing
mod mock_dependency_repository;
mod mock_progress_reporter;

pub use mock_dependency_repository::MockDependencyRepository;
pub use mock_progress_reporter::MockProgressReporter;
