/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console).
pub mod class_renderer;
pub mod dependency_repository;
pub mod output_presenter;
pub mod progress_reporter;

pub use class_renderer::ClassRenderer;
pub use dependency_repository::{DependencyRepository, FetchPage, FetchQuery, MAX_FETCH_PAGES};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
