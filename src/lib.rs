//! deps-mapper - Maps Maven dependency notations to nested generated constants
//!
//! This library turns a flat list of `group:artifact` notations into a prefix
//! tree and then into a nested class hierarchy, so build code can refer to
//! `Libs.Com.Squareup.Okio` instead of the raw string. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_mapping`): notation parsing, path formatting,
//!   tree building and class hierarchy emission
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use deps_mapper::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let use_case = GenerateMappingUseCase::new(Vec::new(), StderrProgressReporter::new());
//!
//! let request = MappingRequest::default().with_dependencies([
//!     "com.squareup.okio:okio",
//!     "com.google.dagger:dagger",
//!     "com.google.dagger:dagger-android",
//! ]);
//! let response = use_case.execute(request).await?;
//!
//! let output = RustModuleRenderer::new().render(&response.class_spec)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod dependency_mapping;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::network::{
        CachingDependencyRepository, GoogleMavenClient, MavenCentralClient,
    };
    pub use crate::adapters::outbound::renderers::{
        JavaSourceRenderer, JsonRenderer, RustModuleRenderer,
    };
    pub use crate::application::dto::{
        MappingRequest, MappingResponse, MappingStats, OutputFormat, RepositoryKind,
    };
    pub use crate::application::use_cases::GenerateMappingUseCase;
    pub use crate::dependency_mapping::domain::{
        ClassSpec, DepFormatter, DependencyMeta, DependencyTree, FieldSpec, Notation,
    };
    pub use crate::dependency_mapping::services::{
        build, ClassWriter, CollisionPolicy, DependencyTreeBuilder, NotationFilter,
    };
    pub use crate::ports::outbound::{
        ClassRenderer, DependencyRepository, FetchPage, FetchQuery, OutputPresenter,
        ProgressReporter,
    };
    pub use crate::shared::error::{ExitCode, MapperError};
    pub use crate::shared::Result;
}
