//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of a listing for rendering.

mod discovery_boundary;
mod discovery_view;
mod discovery_view_builder;
mod map_panel;
mod pagination_view;
mod vendor_card;

pub use discovery_boundary::DiscoveryBoundary;
pub use discovery_view::{DiscoveryMetadata, DiscoveryView, ViewBody};
pub use discovery_view_builder::DiscoveryViewBuilder;
pub use map_panel::{MapPanel, MarkerView, PopupSummary, NO_LOCATED_VENDORS_MESSAGE};
pub use pagination_view::{PageLink, PaginationView};
pub use vendor_card::{CompactCard, VendorCard, VendorLinks, SHORT_DESCRIPTION_CHARS};
