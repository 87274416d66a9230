pub mod class_spec;
pub mod dep_formatter;
pub mod dependency_meta;
pub mod notation;

pub use class_spec::{ClassSpec, FieldSpec};
pub use dep_formatter::{CapitalizePredicate, DepFormatter, ReplaceFn};
pub use dependency_meta::{DependencyMeta, DependencyTree};
pub use notation::{Notation, MAX_NOTATION_LENGTH};
