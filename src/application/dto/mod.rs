/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod mapping_request;
mod mapping_response;
mod output_format;
mod repository_kind;

pub use mapping_request::{ExplicitMapping, MappingRequest, DEFAULT_ROOT_CLASS_NAME};
pub use mapping_response::{MappingResponse, MappingStats};
pub use output_format::OutputFormat;
pub use repository_kind::RepositoryKind;
