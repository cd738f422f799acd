use crate::discovery::domain::DEFAULT_PAGE_SIZE;
use crate::discovery::services::{BaseFilter, GeoLocator};

/// Base URL used for share links when none is configured
pub const DEFAULT_SHARE_BASE_URL: &str = "https://example.com";

/// DiscoveryOptions - per-engine settings supplied by the host
///
/// Built from the configuration file and CLI flags by the host, then handed
/// to the engine at construction. Nothing in here changes after mount.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Values pinned by the hosting page
    pub base: BaseFilter,
    /// Page size used when the query does not carry one
    pub page_size: u32,
    /// Absolute origin prefixed to vendor profile paths in share links
    pub share_base_url: String,
    pub locator: GeoLocator,
}

impl DiscoveryOptions {
    pub fn new() -> Self {
        Self {
            base: BaseFilter::default(),
            page_size: DEFAULT_PAGE_SIZE,
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            locator: GeoLocator::default(),
        }
    }

    pub fn with_base(mut self, base: BaseFilter) -> Self {
        self.base = base;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_share_base_url(mut self, url: impl Into<String>) -> Self {
        self.share_base_url = url.into();
        self
    }

    pub fn with_locator(mut self, locator: GeoLocator) -> Self {
        self.locator = locator;
        self
    }
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self::new()
    }
}
