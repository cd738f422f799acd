use crate::application::dto::{ToggleOutcome, DEFAULT_LOGIN_PATH};
use crate::discovery::domain::{SavedVendorSet, VendorId};
use crate::ports::outbound::{Notifier, SavedVendorStore};
use parking_lot::Mutex;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Message shown when the store cannot be reached
const SAVE_FAILED_MESSAGE: &str = "Couldn't update your saved vendors. Please try again.";

/// Vendors with a toggle awaiting the store. At most one per vendor.
#[derive(Debug, Default)]
pub struct InFlightToggles {
    vendors: Mutex<HashSet<VendorId>>,
}

impl InFlightToggles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, vendor_id: &VendorId) -> bool {
        self.vendors.lock().contains(vendor_id)
    }

    /// Marks the vendor busy until the returned guard drops.
    /// `None` when another toggle already holds it.
    fn begin(&self, vendor_id: &VendorId) -> Option<InFlightGuard<'_>> {
        if self.vendors.lock().insert(vendor_id.clone()) {
            Some(InFlightGuard {
                toggles: self,
                vendor_id: vendor_id.clone(),
            })
        } else {
            None
        }
    }
}

/// Releases the vendor on drop, including when the toggle future is cancelled
struct InFlightGuard<'a> {
    toggles: &'a InFlightToggles,
    vendor_id: VendorId,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.toggles.vendors.lock().remove(&self.vendor_id);
    }
}

/// SaveToggle - optimistic save toggle with exact rollback
///
/// The local flag flips before the store is asked. When the store confirms,
/// its authoritative value wins; otherwise the pre-toggle value is restored.
/// A second toggle for a vendor whose first is still pending is rejected with
/// `ToggleOutcome::InFlight` and leaves the flag alone.
pub struct SaveToggle<'a, S: ?Sized, N: ?Sized> {
    store: &'a S,
    notifier: &'a N,
    in_flight: &'a InFlightToggles,
}

impl<'a, S, N> SaveToggle<'a, S, N>
where
    S: SavedVendorStore + ?Sized,
    N: Notifier + ?Sized,
{
    pub fn new(store: &'a S, notifier: &'a N, in_flight: &'a InFlightToggles) -> Self {
        Self {
            store,
            notifier,
            in_flight,
        }
    }

    pub async fn toggle(
        &self,
        saved: &Mutex<SavedVendorSet>,
        vendor_id: &VendorId,
    ) -> ToggleOutcome {
        let Some(_guard) = self.in_flight.begin(vendor_id) else {
            debug!(vendor = %vendor_id, "Save toggle already pending, ignoring");
            return ToggleOutcome::InFlight;
        };

        let previous = {
            let mut set = saved.lock();
            let previous = set.contains(vendor_id);
            set.set(vendor_id, !previous);
            previous
        };
        debug!(vendor = %vendor_id, saved = !previous, "Optimistic save toggle");

        let response = match self.store.toggle_saved(vendor_id).await {
            Ok(response) => response,
            Err(e) => {
                warn!(vendor = %vendor_id, error = %e, "Save toggle failed, rolling back");
                saved.lock().set(vendor_id, previous);
                self.notifier.error(SAVE_FAILED_MESSAGE);
                return ToggleOutcome::RolledBack {
                    message: SAVE_FAILED_MESSAGE.to_string(),
                };
            }
        };

        if response.success {
            saved.lock().set(vendor_id, response.saved);
            if !response.message.is_empty() {
                self.notifier.info(&response.message);
            }
            return if response.saved {
                ToggleOutcome::Saved
            } else {
                ToggleOutcome::Unsaved
            };
        }

        warn!(
            vendor = %vendor_id,
            requires_auth = response.requires_auth,
            "Save toggle refused, rolling back"
        );
        saved.lock().set(vendor_id, previous);

        if response.requires_auth {
            if !response.message.is_empty() {
                self.notifier.info(&response.message);
            }
            return ToggleOutcome::RedirectRequired {
                redirect_to: response
                    .redirect_to
                    .unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string()),
            };
        }

        let message = if response.message.is_empty() {
            SAVE_FAILED_MESSAGE.to_string()
        } else {
            response.message
        };
        self.notifier.error(&message);
        ToggleOutcome::RolledBack { message }
    }
}
