use super::http_support::{
    build_client, normalize_base_url, validate_url_component, DEFAULT_TIMEOUT_SECS,
};
use crate::application::dto::DEFAULT_LOGIN_PATH;
use crate::discovery::domain::VendorId;
use crate::ports::outbound::{SavedVendorStore, ToggleResponse};
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// HttpSavedVendorStore adapter for the viewer's saved-vendor API
///
/// - `GET {base}/saved` returns a JSON array of vendor ids
/// - `POST {base}/saved/{id}/toggle` returns a toggle response
///
/// A 401 means the viewer is anonymous: the saved set is empty and toggles
/// ask for a sign-in redirect.
pub struct HttpSavedVendorStore {
    client: reqwest::Client,
    base_url: String,
    login_path: String,
}

impl HttpSavedVendorStore {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: build_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS))?,
            base_url: normalize_base_url(base_url)?,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        })
    }

    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    pub fn saved_url(&self) -> String {
        format!("{}/saved", self.base_url)
    }

    pub fn toggle_url(&self, vendor_id: &VendorId) -> Result<String> {
        validate_url_component(vendor_id.as_str(), "Vendor id")?;
        Ok(format!(
            "{}/saved/{}/toggle",
            self.base_url,
            urlencoding::encode(vendor_id.as_str())
        ))
    }
}

#[async_trait]
impl SavedVendorStore for HttpSavedVendorStore {
    async fn get_saved(&self) -> Result<Vec<VendorId>> {
        let response = self.client.get(self.saved_url()).send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            debug!("Anonymous viewer, no saved vendors");
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            anyhow::bail!("Saved vendors API returned status code {}", response.status());
        }

        Ok(response.json::<Vec<VendorId>>().await?)
    }

    async fn toggle_saved(&self, vendor_id: &VendorId) -> Result<ToggleResponse> {
        let url = self.toggle_url(vendor_id)?;
        let response = self.client.post(&url).send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(ToggleResponse::auth_required(self.login_path.clone()));
        }
        if !response.status().is_success() {
            anyhow::bail!("Saved vendors API returned status code {}", response.status());
        }

        Ok(response.json::<ToggleResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let store = HttpSavedVendorStore::new("https://api.example.com/").unwrap();
        assert_eq!(store.saved_url(), "https://api.example.com/saved");
        assert_eq!(
            store.toggle_url(&VendorId::new("lens-co").unwrap()).unwrap(),
            "https://api.example.com/saved/lens-co/toggle"
        );
    }

    #[tokio::test]
    async fn test_unreachable_store_is_an_error() {
        let store = HttpSavedVendorStore::new("http://127.0.0.1:1").unwrap();
        assert!(store.get_saved().await.is_err());
        assert!(store
            .toggle_saved(&VendorId::new("a").unwrap())
            .await
            .is_err());
    }
}
