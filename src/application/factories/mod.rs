mod presenter_factory;
mod renderer_factory;
mod repository_factory;

pub use presenter_factory::{PresenterFactory, PresenterType};
pub use renderer_factory::RendererFactory;
pub use repository_factory::RepositoryFactory;
