use super::http_support::{build_client, normalize_base_url, DEFAULT_TIMEOUT_SECS};
use crate::discovery::domain::{ListingRequest, ViewMode};
use crate::discovery::services::{QueryState, QueryStateCodec};
use crate::ports::outbound::{CatalogPage, CatalogQuery};
use crate::shared::error::FetchError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// HttpCatalogClient adapter for the remote vendor listing API
///
/// Sends `GET {base}/vendors?{query}` where the query is the same encoding the
/// address bar uses. Transport failures and 5xx answers are retried; 4xx answers
/// are reported as rejected requests straight away.
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl HttpCatalogClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: build_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS))?,
            base_url: normalize_base_url(base_url)?,
            max_retries: 3,
        })
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Listing URL for a request
    pub fn listing_url(&self, request: &ListingRequest) -> String {
        let query =
            QueryStateCodec::encode_to_string(&QueryState::new(request.clone(), ViewMode::List));
        if query.is_empty() {
            format!("{}/vendors", self.base_url)
        } else {
            format!("{}/vendors?{}", self.base_url, query)
        }
    }

    async fn fetch_with_retry(&self, url: &str) -> std::result::Result<CatalogPage, FetchError> {
        let mut last_error = FetchError::Unavailable {
            details: "no attempt made".to_string(),
        };

        for attempt in 1..=self.max_retries {
            match self.fetch_once(url).await {
                Ok(page) => return Ok(page),
                Err(e @ FetchError::Unavailable { .. }) => {
                    debug!(attempt, url, error = %e, "Catalog request failed");
                    last_error = e;
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error)
    }

    async fn fetch_once(&self, url: &str) -> std::result::Result<CatalogPage, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Unavailable {
                details: e.to_string(),
            })?;

        let status = response.status();
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::Unavailable {
                details: format!("Catalog API returned status code {}", status),
            });
        }
        if !status.is_success() {
            return Err(FetchError::Rejected {
                message: format!("Catalog API returned status code {}", status),
            });
        }

        response
            .json::<CatalogPage>()
            .await
            .map_err(|e| FetchError::InvalidResponse {
                details: e.to_string(),
            })
    }
}

#[async_trait]
impl CatalogQuery for HttpCatalogClient {
    async fn query(&self, request: &ListingRequest) -> Result<CatalogPage> {
        let url = self.listing_url(request);
        Ok(self.fetch_with_retry(&url).await?)
    }
}
