use crate::adapters::outbound::filesystem::JsonCatalogReader;
use crate::adapters::outbound::memory::{InMemoryCatalog, InMemorySavedVendorStore};
use crate::adapters::outbound::network::{HttpCatalogClient, HttpSavedVendorStore};
use crate::discovery::domain::{ListingRequest, VendorId};
use crate::ports::outbound::{CatalogPage, CatalogQuery, SavedVendorStore, ToggleResponse};
use crate::shared::error::DiscoveryError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Where the vendor catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// JSON file holding an array of vendor summaries
    File(PathBuf),
    /// Base URL of a remote catalog service
    Remote(String),
}

impl CatalogSource {
    /// Classifies a source reference: http(s) URLs are remote, anything else is a path.
    pub fn parse(source: &str) -> Result<Self> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(DiscoveryError::InvalidCatalogSource {
                source_ref: source.to_string(),
                reason: "Catalog source cannot be empty".to_string(),
            }
            .into());
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Remote(trimmed.to_string()))
        } else if lower.contains("://") {
            Err(DiscoveryError::InvalidCatalogSource {
                source_ref: source.to_string(),
                reason: "Only http and https URLs are supported".to_string(),
            }
            .into())
        } else {
            Ok(Self::File(PathBuf::from(trimmed)))
        }
    }
}

/// Catalog adapter chosen at startup
pub enum CatalogBackend {
    Memory(InMemoryCatalog),
    Remote(HttpCatalogClient),
}

#[async_trait]
impl CatalogQuery for CatalogBackend {
    async fn query(&self, request: &ListingRequest) -> Result<CatalogPage> {
        match self {
            CatalogBackend::Memory(catalog) => catalog.query(request).await,
            CatalogBackend::Remote(client) => client.query(request).await,
        }
    }
}

/// Saved-vendor store adapter chosen at startup
pub enum SavedStoreBackend {
    Memory(InMemorySavedVendorStore),
    Remote(HttpSavedVendorStore),
}

#[async_trait]
impl SavedVendorStore for SavedStoreBackend {
    async fn get_saved(&self) -> Result<Vec<VendorId>> {
        match self {
            SavedStoreBackend::Memory(store) => store.get_saved().await,
            SavedStoreBackend::Remote(store) => store.get_saved().await,
        }
    }

    async fn toggle_saved(&self, vendor_id: &VendorId) -> Result<ToggleResponse> {
        match self {
            SavedStoreBackend::Memory(store) => store.toggle_saved(vendor_id).await,
            SavedStoreBackend::Remote(store) => store.toggle_saved(vendor_id).await,
        }
    }
}

/// Factory for the catalog and saved-vendor adapters
pub struct CatalogFactory;

impl CatalogFactory {
    /// Builds the catalog adapter for a source.
    ///
    /// # Errors
    /// Returns an error if the catalog file cannot be read or the URL is invalid
    pub fn create(source: &CatalogSource) -> Result<CatalogBackend> {
        match source {
            CatalogSource::File(path) => {
                let vendors = JsonCatalogReader::new().read(path)?;
                Ok(CatalogBackend::Memory(InMemoryCatalog::new(vendors)))
            }
            CatalogSource::Remote(url) => Ok(CatalogBackend::Remote(HttpCatalogClient::new(url)?)),
        }
    }

    /// Builds the saved-vendor store: remote when a URL is given, otherwise
    /// an in-memory store seeded with `initial`.
    ///
    /// # Errors
    /// Returns an error if the store URL is invalid
    pub fn saved_store(url: Option<&str>, initial: Vec<VendorId>) -> Result<SavedStoreBackend> {
        match url {
            Some(url) => Ok(SavedStoreBackend::Remote(HttpSavedVendorStore::new(url)?)),
            None => Ok(SavedStoreBackend::Memory(
                InMemorySavedVendorStore::with_saved(initial),
            )),
        }
    }
}
