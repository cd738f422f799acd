use crate::discovery::domain::{ListingRequest, VendorSummary};
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Raw answer of the catalog for one request
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    #[serde(default)]
    pub data: Vec<VendorSummary>,
    #[serde(default)]
    pub total_pages: u32,
    /// Set when the catalog refused the request
    #[serde(default)]
    pub error: Option<String>,
}

impl CatalogPage {
    pub fn new(data: Vec<VendorSummary>, total_pages: u32) -> Self {
        Self {
            data,
            total_pages,
            error: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }
}

/// CatalogQuery port for querying the vendor catalog
///
/// This port abstracts the catalog service (HTTP API, in-memory fixture, ...)
/// that filters, sorts and paginates vendors for a [`ListingRequest`].
///
/// # Async Support
/// Queries are async; the engine awaits exactly one query per filter or page
/// change. Implementations must be `Send + Sync`.
#[async_trait]
pub trait CatalogQuery: Send + Sync {
    /// Runs one listing request
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be reached or its answer cannot
    /// be read. A refusal is reported through [`CatalogPage::error`] or a
    /// typed `FetchError`.
    async fn query(&self, request: &ListingRequest) -> Result<CatalogPage>;
}
