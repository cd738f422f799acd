/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (catalog service, saved-vendor store,
/// URL history, platform share, console, etc.).
pub mod catalog_query;
pub mod navigator;
pub mod notifier;
pub mod output_presenter;
pub mod saved_vendor_store;
pub mod share_capability;
pub mod view_formatter;

pub use catalog_query::{CatalogPage, CatalogQuery};
pub use navigator::{NavigationEntry, Navigator, ScrollBehavior};
pub use notifier::Notifier;
pub use output_presenter::OutputPresenter;
pub use saved_vendor_store::{SavedVendorStore, ToggleResponse};
pub use share_capability::{ShareCapability, ShareTarget};
pub use view_formatter::ViewFormatter;
