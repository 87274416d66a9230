mod class_writer;
mod notation_filter;
mod tree_builder;

pub use class_writer::{ClassWriter, CollisionPolicy};
pub use notation_filter::NotationFilter;
pub use tree_builder::{
    build, BuildReport, DependencyTreeBuilder, OverwrittenNotation, RejectedNotation,
};
