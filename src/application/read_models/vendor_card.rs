//! Card view structs for read model
//!
//! These structs provide a flattened view of one vendor as it appears in the
//! list (full card) or beside the map (compact card).

use crate::discovery::domain::{VendorId, VendorSummary};
use serde::Serialize;

/// Maximum number of characters of description shown on a card
pub const SHORT_DESCRIPTION_CHARS: usize = 120;

/// Link construction for vendor pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorLinks {
    share_base_url: String,
}

impl VendorLinks {
    pub fn new(share_base_url: impl Into<String>) -> Self {
        let share_base_url = share_base_url.into().trim_end_matches('/').to_string();
        Self { share_base_url }
    }

    /// Site-relative profile path
    pub fn profile_path(&self, vendor: &VendorSummary) -> String {
        format!("/vendors/{}", urlencoding::encode(&vendor.slug))
    }

    /// Absolute profile URL used for sharing
    pub fn share_url(&self, vendor: &VendorSummary) -> String {
        format!("{}{}", self.share_base_url, self.profile_path(vendor))
    }

    pub fn compare_url(&self, vendor_id: &VendorId) -> String {
        format!("/compare?vendors={}", urlencoding::encode(vendor_id.as_str()))
    }
}

/// View representation of a vendor in list mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorCard {
    pub id: VendorId,
    pub name: String,
    pub rating: f64,
    pub price_from: u64,
    pub short_description: String,
    /// At most the first two categories, in catalog order
    pub categories: Vec<String>,
    pub logo: Option<String>,
    /// First gallery image
    pub cover_image: Option<String>,
    pub is_recommended: bool,
    pub saved: bool,
    pub profile_url: String,
    pub share_url: String,
    pub compare_url: String,
}

impl VendorCard {
    pub fn from_summary(vendor: &VendorSummary, saved: bool, links: &VendorLinks) -> Self {
        Self {
            id: vendor.id.clone(),
            name: vendor.name.clone(),
            rating: vendor.rating,
            price_from: vendor.starting_price,
            short_description: truncate_description(&vendor.description),
            categories: vendor.display_categories().to_vec(),
            logo: vendor.logo.clone(),
            cover_image: vendor.cover_image().map(str::to_string),
            is_recommended: vendor.is_recommended,
            saved,
            profile_url: links.profile_path(vendor),
            share_url: links.share_url(vendor),
            compare_url: links.compare_url(&vendor.id),
        }
    }
}

/// Denser card shown next to the map
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactCard {
    pub id: VendorId,
    pub name: String,
    pub rating: f64,
    pub price_from: u64,
    pub primary_category: Option<String>,
    pub is_recommended: bool,
    pub saved: bool,
    /// Whether the vendor has a marker on the map
    pub located: bool,
    pub profile_url: String,
}

impl CompactCard {
    pub fn from_summary(vendor: &VendorSummary, saved: bool, links: &VendorLinks) -> Self {
        Self {
            id: vendor.id.clone(),
            name: vendor.name.clone(),
            rating: vendor.rating,
            price_from: vendor.starting_price,
            primary_category: vendor.categories.first().cloned(),
            is_recommended: vendor.is_recommended,
            saved,
            located: vendor.located_at().is_some(),
            profile_url: links.profile_path(vendor),
        }
    }
}

/// Cuts a description to `SHORT_DESCRIPTION_CHARS` characters on a char boundary
fn truncate_description(description: &str) -> String {
    let description = description.trim();
    match description.char_indices().nth(SHORT_DESCRIPTION_CHARS) {
        None => description.to_string(),
        Some((cut, _)) => format!("{}…", description[..cut].trim_end()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::domain::vendor::test_support::vendor;
    use crate::discovery::domain::Coordinates;

    fn links() -> VendorLinks {
        VendorLinks::new("https://vendors.example/")
    }

    #[test]
    fn test_short_description_untouched_when_short() {
        assert_eq!(truncate_description("  Candid wedding shoots "), "Candid wedding shoots");
    }

    #[test]
    fn test_short_description_truncated_on_char_boundary() {
        let long = "é".repeat(150);
        let short = truncate_description(&long);
        assert!(short.ends_with('…'));
        assert_eq!(short.chars().count(), SHORT_DESCRIPTION_CHARS + 1);
    }

    #[test]
    fn test_exactly_limit_is_not_truncated() {
        let exact = "a".repeat(SHORT_DESCRIPTION_CHARS);
        assert_eq!(truncate_description(&exact), exact);
    }

    #[test]
    fn test_vendor_card_fields() {
        let mut v = vendor("lens-co", 2500, 4.6);
        v.categories = vec![
            "photography".to_string(),
            "videography".to_string(),
            "drone".to_string(),
        ];
        v.gallery = vec!["cover.jpg".to_string(), "second.jpg".to_string()];

        let card = VendorCard::from_summary(&v, true, &links());
        assert_eq!(card.categories, vec!["photography", "videography"]);
        assert_eq!(card.cover_image.as_deref(), Some("cover.jpg"));
        assert_eq!(card.price_from, 2500);
        assert!(card.saved);
        assert_eq!(card.compare_url, "/compare?vendors=lens-co");
        assert_eq!(card.profile_url, "/vendors/lens-co-slug");
        assert_eq!(card.share_url, "https://vendors.example/vendors/lens-co-slug");
    }

    #[test]
    fn test_compact_card_uses_first_category_and_location() {
        let mut v = vendor("a", 100, 3.5);
        v.categories = vec!["decor".to_string(), "lighting".to_string()];
        v.coordinates = Some(Coordinates { lat: 19.0, lng: 72.8 });

        let card = CompactCard::from_summary(&v, false, &links());
        assert_eq!(card.primary_category.as_deref(), Some("decor"));
        assert!(card.located);
        assert!(!card.saved);
    }
}
