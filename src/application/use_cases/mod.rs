/// Use cases module containing application business logic orchestration
mod generate_mapping;

pub use generate_mapping::{GenerateMappingUseCase, MAX_CONCURRENT_FETCHES};
