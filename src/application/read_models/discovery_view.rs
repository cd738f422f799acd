//! The rendered discovery view
//!
//! `DiscoveryView` is what hosts receive after every operation that changes
//! the listing, and what formatters serialize.

use super::map_panel::MapPanel;
use super::pagination_view::PaginationView;
use super::vendor_card::{CompactCard, VendorCard};
use crate::discovery::domain::{EngineToken, ViewMode};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Rendering metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryMetadata {
    pub engine: EngineToken,
    pub rendered_at: DateTime<Utc>,
    /// Fetch sequence number the view was rendered from (0 when none settled)
    pub fetch_seq: u64,
}

impl DiscoveryMetadata {
    pub fn new(engine: EngineToken, fetch_seq: u64) -> Self {
        Self {
            engine,
            rendered_at: Utc::now(),
            fetch_seq,
        }
    }
}

/// What is shown in the results area
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ViewBody {
    #[serde(rename_all = "camelCase")]
    List {
        cards: Vec<VendorCard>,
        pagination: Option<PaginationView>,
    },
    #[serde(rename_all = "camelCase")]
    Map {
        compact_cards: Vec<CompactCard>,
        map: MapPanel,
        pagination: Option<PaginationView>,
    },
    /// The filter matched nothing
    #[serde(rename_all = "camelCase")]
    NoResults {
        filters_applied: bool,
        /// Query that keeps the view but drops every facet
        clear_filters_query: String,
    },
    /// The fetch failed; `retry_query` re-issues the same request
    #[serde(rename_all = "camelCase")]
    Error {
        message: String,
        details: String,
        retry_query: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryView {
    pub metadata: DiscoveryMetadata,
    /// Encoded query the view reflects
    pub query: String,
    pub mode: ViewMode,
    pub body: ViewBody,
}

impl DiscoveryView {
    pub fn is_error(&self) -> bool {
        matches!(self.body, ViewBody::Error { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, ViewBody::NoResults { .. })
    }

    pub fn pagination(&self) -> Option<&PaginationView> {
        match &self.body {
            ViewBody::List { pagination, .. } | ViewBody::Map { pagination, .. } => {
                pagination.as_ref()
            }
            _ => None,
        }
    }

    /// Number of vendors shown, in either mode
    pub fn vendor_count(&self) -> usize {
        match &self.body {
            ViewBody::List { cards, .. } => cards.len(),
            ViewBody::Map { compact_cards, .. } => compact_cards.len(),
            _ => 0,
        }
    }
}
