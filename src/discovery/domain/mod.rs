pub mod filter_state;
pub mod hover;
pub mod listing;
pub mod saved_vendors;
pub mod vendor;

pub use filter_state::{
    City, FilterState, ListingRequest, RatingFloor, SortField, SortSpec, ViewMode,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use hover::{EngineToken, HoverSignal, HoverState};
pub use listing::{page_count, ListingResult};
pub use saved_vendors::SavedVendorSet;
pub use vendor::{Coordinates, VendorId, VendorSummary};
