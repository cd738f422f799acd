//! vendor-discovery - browse, filter and map marketplace vendor catalogs
//!
//! This library keeps a vendor listing's filter and view state in a shareable
//! query string, fetches matching vendors page by page, and renders them as a
//! card list or as a compact list beside a map, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`discovery`): Filter state, query codec, geospatial and hover logic
//! - **Application Layer** (`application`): The discovery engine and its view models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use vendor_discovery::prelude::*;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<()> {
//! let vendors = JsonCatalogReader::new().read(Path::new("catalog.json"))?;
//!
//! let engine = DiscoveryEngine::new(
//!     InMemoryCatalog::new(vendors),
//!     InMemorySavedVendorStore::new(),
//!     StderrNotifier::new(),
//!     InMemoryHistory::new(),
//!     UnsupportedShare,
//!     DiscoveryOptions::default(),
//!     Arc::new(HoverBus::new()),
//! );
//!
//! let view = engine.mount("mainCategory=photography&minPrice=500").await;
//! println!("{}", MarkdownFormatter::new().format(&view)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod discovery;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{InMemoryHistory, StderrNotifier};
    pub use crate::adapters::outbound::filesystem::{
        JsonCatalogReader, StdoutPresenter, ViewFileWriter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::memory::{InMemoryCatalog, InMemorySavedVendorStore};
    pub use crate::adapters::outbound::network::{HttpCatalogClient, HttpSavedVendorStore};
    pub use crate::adapters::outbound::platform::{RecordingShare, UnsupportedShare};
    pub use crate::application::dto::{
        DiscoveryOptions, OutputFormat, ShareOutcome, ToggleOutcome,
    };
    pub use crate::application::read_models::{
        CompactCard, DiscoveryView, MapPanel, PaginationView, VendorCard, ViewBody,
    };
    pub use crate::application::use_cases::{DiscoveryEngine, FetchOutcome, ListingFetcher};
    pub use crate::discovery::domain::{
        City, Coordinates, EngineToken, FilterState, HoverSignal, HoverState, ListingRequest,
        ListingResult, RatingFloor, SavedVendorSet, SortField, SortSpec, VendorId,
        VendorSummary, ViewMode,
    };
    pub use crate::discovery::policies::ListingOrder;
    pub use crate::discovery::services::{
        BaseFilter, FacetSelection, FilterComposer, GeoLocator, HoverBus, MarkerPopups,
        PopupTransition, QueryState, QueryStateCodec, RawFilterInput,
    };
    pub use crate::ports::inbound::DiscoveryPort;
    pub use crate::ports::outbound::{
        CatalogPage, CatalogQuery, NavigationEntry, Navigator, Notifier, OutputPresenter,
        SavedVendorStore, ScrollBehavior, ShareCapability, ShareTarget, ToggleResponse,
        ViewFormatter,
    };
    pub use crate::shared::error::{DiscoveryError, FetchError};
    pub use crate::shared::Result;
}
