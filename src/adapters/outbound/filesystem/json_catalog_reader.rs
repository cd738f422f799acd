use crate::discovery::domain::VendorSummary;
use crate::shared::error::DiscoveryError;
use crate::shared::Result;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Maximum catalog file size for security (50 MB)
const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// JsonCatalogReader adapter for loading a vendor catalog from disk
///
/// The file holds a JSON array of vendor summaries. Entries that fail to
/// deserialize are skipped with a warning instead of failing the whole load.
pub struct JsonCatalogReader;

impl JsonCatalogReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, path: &Path) -> Result<Vec<VendorSummary>> {
        let content = self.safe_read_file(path)?;

        let entries: Vec<serde_json::Value> =
            serde_json::from_str(&content).map_err(|e| DiscoveryError::CatalogParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let total = entries.len();
        let vendors: Vec<VendorSummary> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                match serde_json::from_value::<VendorSummary>(entry) {
                    Ok(vendor) => Some(vendor),
                    Err(e) => {
                        warn!(index, error = %e, "Skipping invalid catalog entry");
                        None
                    }
                }
            })
            .collect();

        debug!(path = %path.display(), total, loaded = vendors.len(), "Loaded catalog");
        Ok(vendors)
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path).map_err(|_| DiscoveryError::CatalogNotFound {
            path: path.to_path_buf(),
            suggestion: "Pass --catalog with a path to a JSON file or an http(s) URL".to_string(),
        })?;

        // Security check: Reject symbolic links
        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        // Security check: File size limit (prevent DoS via huge files)
        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| {
            DiscoveryError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for JsonCatalogReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn catalog_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_valid_catalog() {
        let file = catalog_file(
            r#"[
                {"id": "lens", "slug": "lens", "name": "Lens", "startingPrice": 900, "rating": 4.5},
                {"id": "bloom", "slug": "bloom", "name": "Bloom", "categories": ["decor"]}
            ]"#,
        );
        let vendors = JsonCatalogReader::new().read(file.path()).unwrap();
        assert_eq!(vendors.len(), 2);
        assert_eq!(vendors[0].starting_price, 900);
        assert_eq!(vendors[1].categories, vec!["decor"]);
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let file = catalog_file(
            r#"[
                {"id": "ok", "slug": "ok", "name": "Ok"},
                {"id": "bad/id", "slug": "x", "name": "Bad"},
                {"name": "missing id"}
            ]"#,
        );
        let vendors = JsonCatalogReader::new().read(file.path()).unwrap();
        assert_eq!(vendors.len(), 1);
        assert_eq!(vendors[0].id.as_str(), "ok");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let file = catalog_file("{not json");
        let err = JsonCatalogReader::new().read(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog file"));
    }

    #[test]
    fn test_missing_file() {
        let err = JsonCatalogReader::new()
            .read(Path::new("/nonexistent/vendors.json"))
            .unwrap_err();
        assert!(err.to_string().contains("Catalog file not found"));
    }
}
