/// Filesystem adapters: catalog loading and saving rendered views
mod json_catalog_reader;
mod view_writer;

pub use json_catalog_reader::JsonCatalogReader;
pub use view_writer::{StdoutPresenter, ViewFileWriter};
