/// In-memory adapters backing the engine with local data
mod in_memory_catalog;
mod in_memory_saved_store;

pub use in_memory_catalog::InMemoryCatalog;
pub use in_memory_saved_store::InMemorySavedVendorStore;
