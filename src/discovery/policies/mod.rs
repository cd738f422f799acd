mod listing_order;

pub use listing_order::ListingOrder;
