//! Core of the mapper: notation validation, path formatting, the prefix
//! tree and the class hierarchy emitted from it. Pure and synchronous.

pub mod domain;
pub mod services;
