/// Shared helpers for the integration test suites
#[allow(dead_code)]
pub mod mocks;
