use crate::shared::Result;

/// OutputPresenter port for presenting the rendered mapping
///
/// This port abstracts the output destination (stdout, file, etc.)
/// of the generated source.
pub trait OutputPresenter {
    /// Presents the rendered content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    /// - The destination is a symbolic link
    fn present(&self, content: &str) -> Result<()>;
}
