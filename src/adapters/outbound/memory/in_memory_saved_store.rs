use crate::application::dto::DEFAULT_LOGIN_PATH;
use crate::discovery::domain::VendorId;
use crate::ports::outbound::{SavedVendorStore, ToggleResponse};
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashSet;

/// InMemorySavedVendorStore adapter keeping the saved set in process
///
/// With `anonymous()` every toggle answers that sign-in is required.
pub struct InMemorySavedVendorStore {
    saved: DashSet<VendorId>,
    requires_auth: bool,
}

impl InMemorySavedVendorStore {
    pub fn new() -> Self {
        Self {
            saved: DashSet::new(),
            requires_auth: false,
        }
    }

    /// Store for a viewer who is not signed in
    pub fn anonymous() -> Self {
        Self {
            saved: DashSet::new(),
            requires_auth: true,
        }
    }

    pub fn with_saved(ids: impl IntoIterator<Item = VendorId>) -> Self {
        let store = Self::new();
        for id in ids {
            store.saved.insert(id);
        }
        store
    }

    pub fn contains(&self, id: &VendorId) -> bool {
        self.saved.contains(id)
    }
}

impl Default for InMemorySavedVendorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SavedVendorStore for InMemorySavedVendorStore {
    async fn get_saved(&self) -> Result<Vec<VendorId>> {
        if self.requires_auth {
            return Ok(Vec::new());
        }
        let mut ids: Vec<VendorId> = self.saved.iter().map(|id| id.clone()).collect();
        ids.sort();
        Ok(ids)
    }

    async fn toggle_saved(&self, vendor_id: &VendorId) -> Result<ToggleResponse> {
        if self.requires_auth {
            return Ok(ToggleResponse::auth_required(DEFAULT_LOGIN_PATH));
        }
        let saved = if self.saved.remove(vendor_id).is_some() {
            false
        } else {
            self.saved.insert(vendor_id.clone());
            true
        };
        Ok(ToggleResponse::saved(saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> VendorId {
        VendorId::new(s).unwrap()
    }

    #[tokio::test]
    async fn test_toggle_flips_membership() {
        let store = InMemorySavedVendorStore::new();

        let first = store.toggle_saved(&id("a")).await.unwrap();
        assert!(first.success && first.saved);
        assert!(store.contains(&id("a")));

        let second = store.toggle_saved(&id("a")).await.unwrap();
        assert!(second.success && !second.saved);
        assert!(!store.contains(&id("a")));
    }

    #[tokio::test]
    async fn test_get_saved_is_sorted() {
        let store = InMemorySavedVendorStore::with_saved([id("b"), id("a")]);
        assert_eq!(store.get_saved().await.unwrap(), vec![id("a"), id("b")]);
    }

    #[tokio::test]
    async fn test_anonymous_store_requires_auth() {
        let store = InMemorySavedVendorStore::anonymous();
        let response = store.toggle_saved(&id("a")).await.unwrap();
        assert!(response.requires_auth);
        assert_eq!(response.redirect_to.as_deref(), Some(DEFAULT_LOGIN_PATH));
        assert!(store.get_saved().await.unwrap().is_empty());
    }
}
