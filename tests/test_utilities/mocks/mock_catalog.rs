use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vendor_discovery::prelude::*;

/// Mock CatalogQuery backed by an InMemoryCatalog
///
/// Records every request, can fail the first N calls and can delay
/// responses per page to reorder completions.
#[derive(Clone)]
pub struct MockCatalog {
    inner: InMemoryCatalog,
    failures_left: Arc<AtomicUsize>,
    delays_ms: Arc<Mutex<Vec<(u32, u64)>>>,
    pub requests: Arc<Mutex<Vec<ListingRequest>>>,
}

impl MockCatalog {
    pub fn new(vendors: Vec<VendorSummary>) -> Self {
        Self {
            inner: InMemoryCatalog::new(vendors),
            failures_left: Arc::new(AtomicUsize::new(0)),
            delays_ms: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing_first(self, failures: usize) -> Self {
        self.failures_left.store(failures, Ordering::SeqCst);
        self
    }

    /// Responses for `page` are delayed by `millis`
    pub fn with_delay(self, page: u32, millis: u64) -> Self {
        self.delays_ms.lock().unwrap().push((page, millis));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl CatalogQuery for MockCatalog {
    async fn query(&self, request: &ListingRequest) -> Result<CatalogPage> {
        self.requests.lock().unwrap().push(request.clone());

        let delay = self
            .delays_ms
            .lock()
            .unwrap()
            .iter()
            .find(|(page, _)| *page == request.page)
            .map(|(_, millis)| *millis);
        if let Some(millis) = delay {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }

        if self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            anyhow::bail!("Mock catalog failure");
        }

        self.inner.query(request).await
    }
}
