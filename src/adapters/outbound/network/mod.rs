/// Network adapters for the remote catalog and saved-vendor APIs
mod http_catalog_client;
mod http_saved_vendor_store;
mod http_support;

pub use http_catalog_client::HttpCatalogClient;
pub use http_saved_vendor_store::HttpSavedVendorStore;
pub use http_support::DEFAULT_TIMEOUT_SECS;
