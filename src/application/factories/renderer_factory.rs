use crate::adapters::outbound::renderers::{JavaSourceRenderer, JsonRenderer, RustModuleRenderer};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ClassRenderer;

/// Factory for creating class renderers
///
/// This factory encapsulates the creation logic for different renderer implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer instance for the specified output format
    ///
    /// `java_package` only applies to Java output.
    ///
    /// # Examples
    /// ```
    /// use deps_mapper::application::dto::OutputFormat;
    /// use deps_mapper::application::factories::RendererFactory;
    ///
    /// let renderer = RendererFactory::create(OutputFormat::Rust, None);
    /// assert_eq!(renderer.default_file_name("Libs"), "deps_mapping.rs");
    /// ```
    pub fn create(format: OutputFormat, java_package: Option<&str>) -> Box<dyn ClassRenderer> {
        match format {
            OutputFormat::Rust => Box::new(RustModuleRenderer::new()),
            OutputFormat::Java => match java_package {
                Some(package) => Box::new(JavaSourceRenderer::with_package(package)),
                None => Box::new(JavaSourceRenderer::new()),
            },
            OutputFormat::Json => Box::new(JsonRenderer::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Rust => "📝 Rendering Rust module output...",
            OutputFormat::Java => "📝 Rendering Java source output...",
            OutputFormat::Json => "📝 Rendering JSON output...",
        }
    }
}
