/// Renderer adapters for the supported output languages
mod java_renderer;
mod json_renderer;
mod rust_renderer;

pub use java_renderer::JavaSourceRenderer;
pub use json_renderer::JsonRenderer;
pub use rust_renderer::RustModuleRenderer;
