mod catalog_factory;
mod formatter_factory;
mod presenter_factory;

pub use catalog_factory::{CatalogBackend, CatalogFactory, CatalogSource, SavedStoreBackend};
pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
