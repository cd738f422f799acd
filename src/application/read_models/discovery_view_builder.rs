//! Builder for constructing DiscoveryView from domain objects

use super::discovery_view::{DiscoveryMetadata, DiscoveryView, ViewBody};
use super::map_panel::MapPanel;
use super::pagination_view::PaginationView;
use super::vendor_card::{CompactCard, VendorCard, VendorLinks};
use crate::discovery::domain::{FilterState, ListingResult, SavedVendorSet, ViewMode};
use crate::discovery::services::{GeoLocator, QueryState, QueryStateCodec};

/// Builder for constructing DiscoveryView from a listing result
///
/// Saved flags are seeded from the `SavedVendorSet` at build time, so a view
/// is a snapshot: re-render after a save toggle to pick up the new flag.
#[derive(Debug, Clone)]
pub struct DiscoveryViewBuilder {
    links: VendorLinks,
    locator: GeoLocator,
}

impl DiscoveryViewBuilder {
    pub fn new(links: VendorLinks, locator: GeoLocator) -> Self {
        Self { links, locator }
    }

    pub fn links(&self) -> &VendorLinks {
        &self.links
    }

    /// Builds the view for a successfully fetched page
    pub fn build(
        &self,
        state: &QueryState,
        result: &ListingResult,
        saved: &SavedVendorSet,
        metadata: DiscoveryMetadata,
    ) -> DiscoveryView {
        let body = if result.is_empty() {
            Self::no_results(state)
        } else {
            let pagination =
                PaginationView::build(state, result.current_page(), result.total_pages());
            match state.view {
                ViewMode::List => ViewBody::List {
                    cards: result
                        .items()
                        .iter()
                        .map(|v| VendorCard::from_summary(v, saved.contains(&v.id), &self.links))
                        .collect(),
                    pagination,
                },
                ViewMode::Map => ViewBody::Map {
                    compact_cards: result
                        .items()
                        .iter()
                        .map(|v| CompactCard::from_summary(v, saved.contains(&v.id), &self.links))
                        .collect(),
                    map: MapPanel::build(result.items(), &self.locator, &self.links),
                    pagination,
                },
            }
        };

        Self::assemble(state, body, metadata)
    }

    pub(super) fn assemble(
        state: &QueryState,
        body: ViewBody,
        metadata: DiscoveryMetadata,
    ) -> DiscoveryView {
        DiscoveryView {
            metadata,
            query: QueryStateCodec::encode_to_string(state),
            mode: state.view,
            body,
        }
    }

    fn no_results(state: &QueryState) -> ViewBody {
        let cleared = QueryState::new(
            FilterState {
                page_size: state.filter.page_size,
                ..FilterState::default()
            },
            state.view,
        );
        ViewBody::NoResults {
            filters_applied: state.filter.has_facets(),
            clear_filters_query: QueryStateCodec::encode_to_string(&cleared),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::domain::vendor::test_support::vendor;
    use crate::discovery::domain::{EngineToken, VendorId};

    fn builder() -> DiscoveryViewBuilder {
        DiscoveryViewBuilder::new(VendorLinks::new("https://x.test"), GeoLocator::default())
    }

    fn metadata() -> DiscoveryMetadata {
        DiscoveryMetadata::new(EngineToken::generate(), 1)
    }

    #[test]
    fn test_list_mode_renders_cards_with_saved_flags() {
        let result = ListingResult::new(vec![vendor("a", 1, 4.0), vendor("b", 2, 4.0)], 1, 1);
        let saved: SavedVendorSet = [VendorId::new("b").unwrap()].into_iter().collect();
        let view = builder().build(&QueryState::default(), &result, &saved, metadata());

        match &view.body {
            ViewBody::List { cards, pagination } => {
                assert_eq!(cards.len(), 2);
                assert!(!cards[0].saved);
                assert!(cards[1].saved);
                assert!(pagination.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(view.query, "");
    }

    #[test]
    fn test_map_mode_renders_compact_cards_and_panel() {
        let state = QueryState::new(FilterState::default(), ViewMode::Map);
        let result = ListingResult::new(vec![vendor("a", 1, 4.0)], 1, 3);
        let view = builder().build(&state, &result, &SavedVendorSet::new(), metadata());

        match &view.body {
            ViewBody::Map {
                compact_cards,
                map,
                pagination,
            } => {
                assert_eq!(compact_cards.len(), 1);
                assert!(matches!(map, MapPanel::NoLocatedVendors { .. }));
                assert_eq!(pagination.as_ref().unwrap().total_pages, 3);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(view.mode, ViewMode::Map);
    }

    #[test]
    fn test_empty_result_renders_no_results_in_either_mode() {
        let filter = FilterState {
            occasion: Some("wedding".to_string()),
            ..FilterState::default()
        };
        for mode in [ViewMode::List, ViewMode::Map] {
            let state = QueryState::new(filter.clone(), mode);
            let view = builder().build(
                &state,
                &ListingResult::new(Vec::new(), 1, 0),
                &SavedVendorSet::new(),
                metadata(),
            );
            match view.body {
                ViewBody::NoResults {
                    filters_applied,
                    clear_filters_query,
                } => {
                    assert!(filters_applied);
                    assert!(!clear_filters_query.contains("occasion"));
                }
                other => panic!("unexpected {:?}", other),
            }
        }
    }
}
