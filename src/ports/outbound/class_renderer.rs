use crate::dependency_mapping::domain::ClassSpec;
use crate::shared::Result;

/// ClassRenderer port for turning a class hierarchy into source text
///
/// This port abstracts the target language of the generated artifact
/// (Rust module, Java source, JSON, etc.).
pub trait ClassRenderer {
    /// Renders the hierarchy rooted at `spec`
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn render(&self, spec: &ClassSpec) -> Result<String>;

    /// File name used when the caller doesn't pick one
    fn default_file_name(&self, root_class_name: &str) -> String;
}
