use crate::discovery::domain::{ListingRequest, ListingResult};
use crate::ports::outbound::CatalogQuery;
use crate::shared::error::FetchError;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};

/// Result of one fetch as seen by its caller
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// This fetch is now the current listing
    Current { seq: u64, result: ListingResult },
    /// A newer fetch settled first; this one was discarded
    Superseded { seq: u64, current_seq: u64 },
}

/// The most recently settled fetch, successful or not
#[derive(Debug, Clone, PartialEq)]
pub struct SettledFetch {
    pub seq: u64,
    pub request: ListingRequest,
    pub outcome: Result<ListingResult, FetchError>,
}

/// ListingFetcher - issues catalog fetches and decides which one is current
///
/// Every fetch takes a ticket from a monotonic sequence. When it settles, it
/// replaces the current listing only if no newer ticket has settled already,
/// so a slow response can never overwrite a faster, newer one.
pub struct ListingFetcher<C> {
    catalog: C,
    issued: AtomicU64,
    settled: Mutex<Option<SettledFetch>>,
}

impl<C> ListingFetcher<C>
where
    C: CatalogQuery,
{
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            issued: AtomicU64::new(0),
            settled: Mutex::new(None),
        }
    }

    /// Fetches one page for `request`.
    ///
    /// # Errors
    /// Returns the fetch error when this fetch is the newest to settle.
    /// Errors of superseded fetches are dropped.
    pub async fn fetch(&self, request: &ListingRequest) -> Result<FetchOutcome, FetchError> {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        info!(seq, page = request.page, "Issuing catalog fetch");

        let outcome = match self.catalog.query(request).await {
            Ok(page) => match page.error {
                Some(message) => Err(FetchError::Rejected { message }),
                None => Ok(ListingResult::new(
                    page.data,
                    request.page,
                    page.total_pages,
                )),
            },
            Err(e) => Err(FetchError::from_anyhow(e)),
        };

        self.settle(seq, request, outcome)
    }

    fn settle(
        &self,
        seq: u64,
        request: &ListingRequest,
        outcome: Result<ListingResult, FetchError>,
    ) -> Result<FetchOutcome, FetchError> {
        let mut settled = self.settled.lock();
        if let Some(current) = settled.as_ref() {
            if current.seq > seq {
                warn!(seq, current_seq = current.seq, "Discarding superseded fetch");
                return Ok(FetchOutcome::Superseded {
                    seq,
                    current_seq: current.seq,
                });
            }
        }

        *settled = Some(SettledFetch {
            seq,
            request: request.clone(),
            outcome: outcome.clone(),
        });
        drop(settled);

        match outcome {
            Ok(result) => {
                info!(
                    seq,
                    items = result.items().len(),
                    total_pages = result.total_pages(),
                    "Applied listing"
                );
                Ok(FetchOutcome::Current { seq, result })
            }
            Err(error) => Err(error),
        }
    }

    /// Last applied listing, if the newest settled fetch succeeded
    pub fn current(&self) -> Option<ListingResult> {
        self.settled
            .lock()
            .as_ref()
            .and_then(|s| s.outcome.as_ref().ok().cloned())
    }

    pub fn settled(&self) -> Option<SettledFetch> {
        self.settled.lock().clone()
    }

    /// Number of fetches issued so far
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}
