//! Mock implementations for testing
#![allow(dead_code)]

mod mock_catalog;
mod mock_navigator;
mod mock_notifier;
mod mock_saved_store;

pub use mock_catalog::MockCatalog;
pub use mock_navigator::MockNavigator;
pub use mock_notifier::MockNotifier;
pub use mock_saved_store::MockSavedStore;
