pub mod facet_matcher;
pub mod filter_composer;
pub mod geo_locator;
pub mod hover_sync;
pub mod query_codec;

pub use facet_matcher::FacetMatcher;
pub use filter_composer::{BaseFilter, FacetSelection, FilterComposer, RawFilterInput};
pub use geo_locator::{
    Bounds, GeoLocator, MapLayout, MapMarker, MarkerCluster, MarkerGlyph, DEFAULT_CENTER,
};
pub use hover_sync::{HoverBus, HoverSynchronizer, MarkerPopups, PopupTransition};
pub use query_codec::{QueryParams, QueryState, QueryStateCodec};
