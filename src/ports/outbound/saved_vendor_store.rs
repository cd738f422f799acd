use crate::discovery::domain::VendorId;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Answer of the store to a save toggle
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub success: bool,
    /// Authoritative saved state after the toggle
    pub saved: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub requires_auth: bool,
    #[serde(default)]
    pub redirect_to: Option<String>,
}

impl ToggleResponse {
    pub fn saved(saved: bool) -> Self {
        Self {
            success: true,
            saved,
            message: if saved {
                "Vendor saved".to_string()
            } else {
                "Vendor removed from saved".to_string()
            },
            requires_auth: false,
            redirect_to: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            saved: false,
            message: message.into(),
            requires_auth: false,
            redirect_to: None,
        }
    }

    pub fn auth_required(redirect_to: impl Into<String>) -> Self {
        Self {
            success: false,
            saved: false,
            message: "Please sign in to save vendors".to_string(),
            requires_auth: true,
            redirect_to: Some(redirect_to.into()),
        }
    }
}

/// SavedVendorStore port for the viewer's saved vendors
///
/// The store belongs to the viewer's session. The engine reads it once per
/// mount and toggles through it; it never writes saved state into listings.
#[async_trait]
pub trait SavedVendorStore: Send + Sync {
    /// Ids the viewer has saved
    async fn get_saved(&self) -> Result<Vec<VendorId>>;

    /// Flips the saved state of `vendor_id`
    ///
    /// # Errors
    /// Returns an error if the store cannot be reached. Business failures
    /// (including "not signed in") come back as an unsuccessful response.
    async fn toggle_saved(&self, vendor_id: &VendorId) -> Result<ToggleResponse>;
}
