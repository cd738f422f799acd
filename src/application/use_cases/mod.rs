/// Use cases module containing application business logic orchestration
mod discover_vendors;
mod fetch_listing;
mod share_vendor;
mod toggle_saved;

pub use discover_vendors::DiscoveryEngine;
pub use fetch_listing::{FetchOutcome, ListingFetcher, SettledFetch};
pub use share_vendor::ShareVendor;
pub use toggle_saved::{InFlightToggles, SaveToggle};
