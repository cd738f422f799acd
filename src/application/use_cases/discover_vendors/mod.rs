use crate::application::dto::{DiscoveryOptions, ShareOutcome, ToggleOutcome};
use crate::application::read_models::{
    DiscoveryBoundary, DiscoveryMetadata, DiscoveryView, DiscoveryViewBuilder, VendorLinks,
};
use crate::application::use_cases::fetch_listing::{FetchOutcome, ListingFetcher};
use crate::application::use_cases::share_vendor::ShareVendor;
use crate::application::use_cases::toggle_saved::{InFlightToggles, SaveToggle};
use crate::discovery::domain::{
    EngineToken, HoverSignal, HoverState, ListingResult, SavedVendorSet, VendorId, ViewMode,
};
use crate::discovery::services::{
    FacetSelection, FilterComposer, HoverBus, HoverSynchronizer, MarkerPopups, QueryParams,
    QueryState, QueryStateCodec, RawFilterInput,
};
use crate::discovery::services::query_codec::KEY_PAGE_SIZE;
use crate::ports::inbound::DiscoveryPort;
use crate::ports::outbound::{CatalogQuery, Navigator, Notifier, SavedVendorStore, ShareCapability};
use crate::shared::error::FetchError;
use crate::shared::Result;
use anyhow::anyhow;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// DiscoveryEngine - one mounted vendor discovery surface
///
/// This use case owns the filter state, the current listing and the local
/// copy of the viewer's saved vendors, and wires them to infrastructure
/// through generic dependency injection.
///
/// # Type Parameters
/// * `C` - CatalogQuery implementation
/// * `S` - SavedVendorStore implementation
/// * `N` - Notifier implementation
/// * `NAV` - Navigator implementation
/// * `SH` - ShareCapability implementation
pub struct DiscoveryEngine<C, S, N, NAV, SH> {
    token: EngineToken,
    composer: FilterComposer,
    fetcher: ListingFetcher<C>,
    saved_store: S,
    notifier: N,
    navigator: NAV,
    share_capability: SH,
    builder: DiscoveryViewBuilder,
    default_page_size: u32,
    bus: Arc<HoverBus>,
    hover: Mutex<HoverSynchronizer>,
    saved: Mutex<SavedVendorSet>,
    in_flight: InFlightToggles,
    state: Mutex<QueryState>,
}

impl<C, S, N, NAV, SH> DiscoveryEngine<C, S, N, NAV, SH>
where
    C: CatalogQuery,
    S: SavedVendorStore,
    N: Notifier,
    NAV: Navigator,
    SH: ShareCapability,
{
    /// Creates an engine with injected dependencies. No I/O happens until `mount`.
    pub fn new(
        catalog: C,
        saved_store: S,
        notifier: N,
        navigator: NAV,
        share_capability: SH,
        options: DiscoveryOptions,
        bus: Arc<HoverBus>,
    ) -> Self {
        let token = EngineToken::generate();
        let hover = Mutex::new(bus.publisher(token));
        debug!(engine = %token, "Creating discovery engine");

        Self {
            token,
            composer: FilterComposer::new(options.base),
            fetcher: ListingFetcher::new(catalog),
            saved_store,
            notifier,
            navigator,
            share_capability,
            builder: DiscoveryViewBuilder::new(
                VendorLinks::new(options.share_base_url),
                options.locator,
            ),
            default_page_size: options.page_size,
            bus,
            hover,
            saved: Mutex::new(SavedVendorSet::new()),
            in_flight: InFlightToggles::new(),
            state: Mutex::new(QueryState::default()),
        }
    }

    pub fn token(&self) -> EngineToken {
        self.token
    }

    /// State the engine last asked the catalog for
    pub fn state(&self) -> QueryState {
        self.state.lock().clone()
    }

    pub fn saved_vendors(&self) -> SavedVendorSet {
        self.saved.lock().clone()
    }

    /// Last applied listing
    pub fn current_listing(&self) -> Option<ListingResult> {
        self.fetcher.current()
    }

    /// Map-side subscriber for this engine's hover signals
    pub fn subscribe_map(&self) -> MarkerPopups {
        self.bus.subscribe(self.token)
    }

    pub fn hover_state(&self) -> HoverState {
        self.hover.lock().state().clone()
    }

    /// Pointer entered a compact card
    pub fn pointer_enter(&self, vendor_id: VendorId) -> Option<HoverSignal> {
        self.hover.lock().pointer_enter(vendor_id)
    }

    /// Pointer left the card list
    pub fn pointer_leave(&self) -> Option<HoverSignal> {
        self.hover.lock().pointer_leave()
    }

    /// Re-renders the newest settled fetch, e.g. after a save toggle.
    /// `None` until the first fetch settles.
    pub fn render_current(&self) -> Option<DiscoveryView> {
        let settled = self.fetcher.settled()?;
        let view = self.state.lock().view;
        let state = QueryState::new(settled.request, view);
        Some(self.render(&state, settled.outcome.as_ref(), settled.seq))
    }

    /// Decodes a query and applies the engine's base filter and page size
    fn decode(&self, query: &str) -> QueryState {
        let params = QueryParams::parse(query);
        let mut state = QueryStateCodec::decode_params(&params);
        if params.get(KEY_PAGE_SIZE).is_none() {
            state.filter.page_size = self.default_page_size;
        }
        state.filter = self.composer.base().apply(state.filter).normalized();
        state
    }

    async fn load_saved(&self) {
        match self.saved_store.get_saved().await {
            Ok(ids) => {
                let set: SavedVendorSet = ids.into_iter().collect();
                debug!(engine = %self.token, count = set.len(), "Loaded saved vendors");
                *self.saved.lock() = set;
            }
            Err(e) => {
                warn!(engine = %self.token, error = %e, "Could not load saved vendors");
            }
        }
    }

    async fn fetch(&self, state: &QueryState) -> std::result::Result<FetchOutcome, FetchError> {
        *self.state.lock() = state.clone();
        self.notifier.fetch_started(state.filter.page);
        let outcome = self.fetcher.fetch(&state.filter).await;
        self.notifier.fetch_finished();
        outcome
    }

    fn render_outcome(
        &self,
        state: &QueryState,
        outcome: std::result::Result<FetchOutcome, FetchError>,
    ) -> DiscoveryView {
        match outcome {
            Ok(FetchOutcome::Current { seq, result }) => self.render(state, Ok(&result), seq),
            Ok(FetchOutcome::Superseded { .. }) => self.render_current().unwrap_or_else(|| {
                let empty = ListingResult::new(Vec::new(), state.filter.page, 0);
                self.render(state, Ok(&empty), 0)
            }),
            Err(error) => {
                let seq = self.fetcher.settled().map_or(0, |s| s.seq);
                self.render(state, Err(&error), seq)
            }
        }
    }

    fn render(
        &self,
        state: &QueryState,
        outcome: std::result::Result<&ListingResult, &FetchError>,
        seq: u64,
    ) -> DiscoveryView {
        let saved = self.saved.lock().clone();
        DiscoveryBoundary::render(
            &self.builder,
            state,
            outcome,
            &saved,
            DiscoveryMetadata::new(self.token, seq),
        )
    }

    /// Pushes a history entry for `state`, then fetches and renders it
    async fn commit_and_fetch(&self, state: QueryState) -> DiscoveryView {
        self.composer.commit(&state, &self.navigator);
        let outcome = self.fetch(&state).await;
        self.render_outcome(&state, outcome)
    }
}

#[async_trait]
impl<C, S, N, NAV, SH> DiscoveryPort for DiscoveryEngine<C, S, N, NAV, SH>
where
    C: CatalogQuery,
    S: SavedVendorStore,
    N: Notifier,
    NAV: Navigator,
    SH: ShareCapability,
{
    async fn mount(&self, query: &str) -> DiscoveryView {
        let state = self.decode(query);
        info!(engine = %self.token, query, "Mounting discovery engine");
        let ((), outcome) = futures::join!(self.load_saved(), self.fetch(&state));
        self.render_outcome(&state, outcome)
    }

    async fn navigate(&self, query: &str) -> DiscoveryView {
        let state = self.decode(query);
        let outcome = self.fetch(&state).await;
        self.render_outcome(&state, outcome)
    }

    async fn apply_filters(&self, raw: &RawFilterInput) -> DiscoveryView {
        let mut filter = self.composer.compose(raw);
        if raw.page_size.is_none() {
            filter.page_size = self.default_page_size;
            filter = filter.normalized();
        }
        let view = self.state.lock().view;
        self.commit_and_fetch(QueryState::new(filter, view)).await
    }

    async fn select_facet(&self, selection: FacetSelection) -> DiscoveryView {
        let current = self.state();
        let filter = self.composer.toggle(&current.filter, selection);
        self.commit_and_fetch(QueryState::new(filter, current.view))
            .await
    }

    async fn go_to_page(&self, page: u32) -> DiscoveryView {
        let current = self.state();
        self.commit_and_fetch(QueryState::new(current.filter.with_page(page), current.view))
            .await
    }

    async fn switch_view(&self, view: ViewMode) -> DiscoveryView {
        let state = {
            let mut state = self.state.lock();
            state.view = view;
            state.clone()
        };
        self.composer.commit(&state, &self.navigator);

        match self.render_current() {
            Some(rendered) => rendered,
            None => {
                let outcome = self.fetch(&state).await;
                self.render_outcome(&state, outcome)
            }
        }
    }

    async fn retry(&self) -> DiscoveryView {
        let state = self.state();
        info!(engine = %self.token, "Retrying catalog fetch");
        let outcome = self.fetch(&state).await;
        self.render_outcome(&state, outcome)
    }

    async fn toggle_saved(&self, vendor_id: &VendorId) -> ToggleOutcome {
        SaveToggle::new(&self.saved_store, &self.notifier, &self.in_flight)
            .toggle(&self.saved, vendor_id)
            .await
    }

    fn share(&self, vendor_id: &VendorId) -> Result<ShareOutcome> {
        let listing = self
            .fetcher
            .current()
            .ok_or_else(|| anyhow!("No listing loaded"))?;
        let vendor = listing
            .items()
            .iter()
            .find(|v| &v.id == vendor_id)
            .ok_or_else(|| anyhow!("Vendor {} is not in the current listing", vendor_id))?;

        Ok(ShareVendor::new(&self.share_capability, self.builder.links()).share(vendor))
    }
}

impl<C, S, N, NAV, SH> Drop for DiscoveryEngine<C, S, N, NAV, SH> {
    fn drop(&mut self) {
        self.bus.release(self.token);
    }
}
