use crate::shared::error::DiscoveryError;
use crate::shared::Result;
use std::time::Duration;

/// Request timeout for every discovery API call
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub(super) fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    let user_agent = format!("vendor-discovery/{}", env!("CARGO_PKG_VERSION"));
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Checks an API base URL and strips any trailing slash
pub(super) fn normalize_base_url(base_url: &str) -> Result<String> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(DiscoveryError::InvalidCatalogSource {
            source_ref: base_url.to_string(),
            reason: "Only http and https URLs are supported".to_string(),
        }
        .into());
    }
    if trimmed.contains('?') || trimmed.contains('#') {
        return Err(DiscoveryError::InvalidCatalogSource {
            source_ref: base_url.to_string(),
            reason: "Base URL must not carry a query or fragment".to_string(),
        }
        .into());
    }
    Ok(trimmed.to_string())
}

/// Validates a path segment before it is spliced into a URL
pub(super) fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
    // Security: Prevent URL injection attacks
    if component.contains('/') || component.contains('\\') {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            component_type
        );
    }

    if component.contains("..") {
        anyhow::bail!(
            "Security: {} contains '..' which is not allowed",
            component_type
        );
    }

    if component.contains('#') || component.contains('?') || component.contains('@') {
        anyhow::bail!("Security: {} contains URL-unsafe characters", component_type);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://api.example.com/v1/").unwrap(),
            "https://api.example.com/v1"
        );
    }

    #[test]
    fn test_normalize_base_url_rejects_other_schemes() {
        let err = normalize_base_url("ftp://api.example.com").unwrap_err();
        assert!(err.to_string().contains("Only http and https"));
        assert!(normalize_base_url("api.example.com").is_err());
    }

    #[test]
    fn test_normalize_base_url_rejects_query() {
        assert!(normalize_base_url("https://api.example.com?x=1").is_err());
    }

    #[test]
    fn test_validate_url_component() {
        assert!(validate_url_component("lens-co_1", "Vendor id").is_ok());
        assert!(validate_url_component("../admin", "Vendor id").is_err());
        assert!(validate_url_component("a/b", "Vendor id").is_err());
        assert!(validate_url_component("a?b", "Vendor id").is_err());
    }

    #[test]
    fn test_build_client() {
        assert!(build_client(Duration::from_secs(1)).is_ok());
    }
}
