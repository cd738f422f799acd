use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use vendor_discovery::prelude::*;

/// Mock SavedVendorStore for testing
#[derive(Clone, Default)]
pub struct MockSavedStore {
    pub saved: Arc<Mutex<BTreeSet<VendorId>>>,
    pub should_fail: bool,
    pub toggle_calls: Arc<Mutex<Vec<VendorId>>>,
}

impl MockSavedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_saved(ids: &[&str]) -> Self {
        let store = Self::new();
        {
            let mut saved = store.saved.lock().unwrap();
            for id in ids {
                saved.insert(VendorId::new(*id).unwrap());
            }
        }
        store
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
impl SavedVendorStore for MockSavedStore {
    async fn get_saved(&self) -> Result<Vec<VendorId>> {
        Ok(self.saved.lock().unwrap().iter().cloned().collect())
    }

    async fn toggle_saved(&self, vendor_id: &VendorId) -> Result<ToggleResponse> {
        self.toggle_calls.lock().unwrap().push(vendor_id.clone());
        if self.should_fail {
            anyhow::bail!("Mock saved store failure");
        }

        let mut saved = self.saved.lock().unwrap();
        let now_saved = if saved.remove(vendor_id) {
            false
        } else {
            saved.insert(vendor_id.clone());
            true
        };
        Ok(ToggleResponse::saved(now_saved))
    }
}
