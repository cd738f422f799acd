use crate::discovery::domain::{ListingRequest, VendorSummary};
use crate::discovery::policies::ListingOrder;
use crate::discovery::services::FacetMatcher;
use crate::ports::outbound::{CatalogPage, CatalogQuery};
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// InMemoryCatalog adapter serving listings from a loaded vendor list
///
/// Filters with `FacetMatcher`, orders with `ListingOrder` and cuts the
/// requested page, the same contract the remote catalog API honors.
#[derive(Clone)]
pub struct InMemoryCatalog {
    vendors: Arc<Vec<VendorSummary>>,
}

impl InMemoryCatalog {
    pub fn new(vendors: Vec<VendorSummary>) -> Self {
        Self {
            vendors: Arc::new(vendors),
        }
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

#[async_trait]
impl CatalogQuery for InMemoryCatalog {
    async fn query(&self, request: &ListingRequest) -> Result<CatalogPage> {
        let matcher = FacetMatcher::new(request);
        let mut matched: Vec<VendorSummary> = self
            .vendors
            .iter()
            .filter(|v| matcher.matches(v))
            .cloned()
            .collect();
        debug!(matched = matched.len(), total = self.vendors.len(), "Filtered catalog");

        ListingOrder::sort(&mut matched, request.sort);
        let page = ListingOrder::paginate(matched, request.page, request.page_size);

        Ok(CatalogPage::new(page.items().to_vec(), page.total_pages()))
    }
}
