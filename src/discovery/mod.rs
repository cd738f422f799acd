//! Domain layer: filter state, vendors, and the pure services that operate on them.
pub mod domain;
pub mod policies;
pub mod services;
