use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Maximum length for vendor identifiers (security limit)
const MAX_VENDOR_ID_LENGTH: usize = 128;

/// Number of categories shown on a card
pub const DISPLAYED_CATEGORY_COUNT: usize = 2;

/// NewType wrapper for a vendor identifier with validation
///
/// Vendor ids travel through query strings and URL path segments, so only
/// alphanumerics, hyphens and underscores are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VendorId(String);

impl VendorId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            anyhow::bail!("Vendor id cannot be empty");
        }

        if id.len() > MAX_VENDOR_ID_LENGTH {
            anyhow::bail!(
                "Vendor id is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_VENDOR_ID_LENGTH
            );
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            anyhow::bail!(
                "Vendor id contains invalid characters. Only alphanumeric, hyphens and underscores are allowed."
            );
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VendorId {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<VendorId> for String {
    fn from(id: VendorId) -> Self {
        id.0
    }
}

impl std::fmt::Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A WGS84 position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Creates validated coordinates. Non-finite or out-of-range values are rejected.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            anyhow::bail!("Coordinates must be finite numbers");
        }
        if !(-90.0..=90.0).contains(&lat) {
            anyhow::bail!("Latitude {} is out of range [-90, 90]", lat);
        }
        if !(-180.0..=180.0).contains(&lng) {
            anyhow::bail!("Longitude {} is out of range [-180, 180]", lng);
        }
        Ok(Self { lat, lng })
    }

    pub fn is_valid(&self) -> bool {
        Self::new(self.lat, self.lng).is_ok()
    }
}

/// Read-only projection of a vendor used for listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorSummary {
    pub id: VendorId,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub starting_price: u64,
    #[serde(default)]
    pub is_recommended: bool,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub occasions: Vec<String>,
}

impl VendorSummary {
    /// Categories shown on a card, in catalog order
    pub fn display_categories(&self) -> &[String] {
        let end = self.categories.len().min(DISPLAYED_CATEGORY_COUNT);
        &self.categories[..end]
    }

    /// Coordinates usable for map placement
    pub fn located_at(&self) -> Option<Coordinates> {
        self.coordinates.filter(Coordinates::is_valid)
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.gallery.first().map(String::as_str)
    }
}
