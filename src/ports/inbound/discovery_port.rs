use crate::application::dto::{ShareOutcome, ToggleOutcome};
use crate::application::read_models::DiscoveryView;
use crate::discovery::domain::{VendorId, ViewMode};
use crate::discovery::services::{FacetSelection, RawFilterInput};
use crate::shared::Result;
use async_trait::async_trait;

/// DiscoveryPort - Inbound port for the vendor discovery engine
///
/// This port defines the interface that hosts (CLI, page shell, tests) use to
/// drive one mounted discovery engine. Every operation that changes the
/// listing returns the freshly rendered view; fetch failures are rendered as
/// an error view rather than returned as `Err`.
#[async_trait]
pub trait DiscoveryPort: Send + Sync {
    /// Mounts the engine on a query string
    ///
    /// Loads the saved vendor set and the first listing concurrently.
    /// The saved set is fetched once per mount.
    async fn mount(&self, query: &str) -> DiscoveryView;

    /// Re-derives state from a query string (back/forward, deep links)
    async fn navigate(&self, query: &str) -> DiscoveryView;

    /// Composes raw control values, pushes a history entry and fetches
    async fn apply_filters(&self, raw: &RawFilterInput) -> DiscoveryView;

    /// Toggles a single facet; the page resets to 1
    async fn select_facet(&self, selection: FacetSelection) -> DiscoveryView;

    /// Moves to another page of the current filter
    async fn go_to_page(&self, page: u32) -> DiscoveryView;

    /// Switches between list and map without refetching
    async fn switch_view(&self, view: ViewMode) -> DiscoveryView;

    /// Re-issues the current request after an error
    async fn retry(&self) -> DiscoveryView;

    /// Flips the saved flag of a vendor optimistically
    ///
    /// The local flag is restored exactly when the store refuses or fails.
    async fn toggle_saved(&self, vendor_id: &VendorId) -> ToggleOutcome;

    /// Shares a vendor from the current listing
    ///
    /// # Errors
    /// Returns an error if the vendor is not part of the current listing
    fn share(&self, vendor_id: &VendorId) -> Result<ShareOutcome>;
}
