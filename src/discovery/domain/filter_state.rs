use crate::shared::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Page size used when none (or an invalid one) is requested
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Upper bound on page size accepted from the outside
pub const MAX_PAGE_SIZE: u32 = 100;

/// Maximum length of a city slug
const MAX_CITY_LENGTH: usize = 64;

/// NewType wrapper for a city facet value
///
/// Cities are lowercase slugs (`mumbai`, `new-delhi`). Input is lowercased and
/// trimmed; anything else that is not a slug is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City(String);

impl City {
    pub fn new(raw: &str) -> Result<Self> {
        let slug = raw.trim().to_lowercase();
        if slug.is_empty() {
            anyhow::bail!("City cannot be empty");
        }
        if slug.len() > MAX_CITY_LENGTH {
            anyhow::bail!("City is too long ({} bytes)", slug.len());
        }
        if !slug
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            anyhow::bail!("City '{}' is not a valid slug", raw);
        }
        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Star-rating floor. Only exact star values 1 through 5 exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RatingFloor(u8);

impl RatingFloor {
    /// Returns `None` for anything outside `1..=5`; values are dropped, never clamped.
    pub fn new(stars: i64) -> Option<Self> {
        if (1..=5).contains(&stars) {
            Some(Self(stars as u8))
        } else {
            None
        }
    }

    pub fn stars(self) -> u8 {
        self.0
    }

    pub fn admits(self, rating: f64) -> bool {
        rating >= f64::from(self.0)
    }
}

/// Orderable listing fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortField {
    pub const ALL_STRINGS: &'static [&'static str] = &["price-low", "price-high", "rating"];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::PriceLow => "price-low",
            SortField::PriceHigh => "price-high",
            SortField::Rating => "rating",
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price-low" => Ok(SortField::PriceLow),
            "price-high" => Ok(SortField::PriceHigh),
            "rating" => Ok(SortField::Rating),
            _ => Err(format!(
                "Invalid sort: {}. Expected one of: {}",
                s,
                Self::ALL_STRINGS.join(", ")
            )),
        }
    }
}

/// Sort selection.
///
/// `Recommended` and field ordering are alternatives: a listing is either
/// restricted to recommended vendors or ordered by one field, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "field", rename_all = "kebab-case")]
pub enum SortSpec {
    #[default]
    Unsorted,
    ByField(SortField),
    Recommended,
}

impl SortSpec {
    /// Parses a UI sort key (`price-low`, `price-high`, `rating`, `recommended`, `none`).
    /// Unknown keys mean "no sort".
    pub fn from_key(key: &str) -> Self {
        let key = key.trim().to_lowercase();
        match key.as_str() {
            "recommended" => SortSpec::Recommended,
            "" | "none" => SortSpec::Unsorted,
            other => other
                .parse::<SortField>()
                .map(SortSpec::ByField)
                .unwrap_or(SortSpec::Unsorted),
        }
    }
}

/// Which projection of the result set is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Map,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Map => "map",
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "list" => Ok(ViewMode::List),
            "map" => Ok(ViewMode::Map),
            _ => Err(format!(
                "Invalid view: {}. Please specify 'list' or 'map'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable set of facets plus pagination and sort.
///
/// A `FilterState` produced by the composer or the codec is always normalized:
/// `min_price <= max_price`, `page >= 1`, `0 < page_size <= MAX_PAGE_SIZE`
/// and no empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search_text: Option<String>,
    pub location: Option<City>,
    pub main_category: Option<String>,
    pub sub_category: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub rating_floor: Option<RatingFloor>,
    pub occasion: Option<String>,
    pub sort: SortSpec,
    pub page: u32,
    pub page_size: u32,
}

/// A validated filter ready for the catalog
pub type ListingRequest = FilterState;

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_text: None,
            location: None,
            main_category: None,
            sub_category: None,
            min_price: None,
            max_price: None,
            rating_floor: None,
            occasion: None,
            sort: SortSpec::Unsorted,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterState {
    pub fn is_recommended(&self) -> bool {
        matches!(self.sort, SortSpec::Recommended)
    }

    /// Same facets, different page
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Whether any facet (anything except sort and pagination) is set
    pub fn has_facets(&self) -> bool {
        self.search_text.is_some()
            || self.location.is_some()
            || self.main_category.is_some()
            || self.sub_category.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.rating_floor.is_some()
            || self.occasion.is_some()
            || self.is_recommended()
    }

    /// Restores the state invariants. Idempotent.
    pub fn normalized(mut self) -> Self {
        self.search_text = non_empty(self.search_text);
        self.main_category = non_empty(self.main_category);
        self.sub_category = non_empty(self.sub_category);
        self.occasion = non_empty(self.occasion);

        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if max < min {
                self.min_price = Some(max);
                self.max_price = Some(min);
            }
        }

        self.page = self.page.max(1);
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self.page_size = self.page_size.min(MAX_PAGE_SIZE);
        self
    }
}

/// Parses a price facet. Fractional prices are truncated; negative, non-finite
/// or non-numeric input is dropped.
pub fn parse_price(raw: Option<&str>) -> Option<u64> {
    let raw = raw?;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value.trunc() as u64),
        _ => {
            debug!(raw, "Dropping malformed price");
            None
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_city_new_lowercases_and_trims() {
        let city = City::new("  Mumbai ").unwrap();
        assert_eq!(city.as_str(), "mumbai");
    }

    #[test]
    fn test_city_rejects_non_slug() {
        assert!(City::new("").is_err());
        assert!(City::new("new delhi").is_err());
        assert!(City::new("a&b").is_err());
    }

    #[test]
    fn test_rating_floor_drops_out_of_range() {
        assert!(RatingFloor::new(0).is_none());
        assert!(RatingFloor::new(6).is_none());
        assert!(RatingFloor::new(-1).is_none());
        assert_eq!(RatingFloor::new(4).unwrap().stars(), 4);
    }

    #[test]
    fn test_rating_floor_admits() {
        let floor = RatingFloor::new(4).unwrap();
        assert!(floor.admits(4.0));
        assert!(floor.admits(4.7));
        assert!(!floor.admits(3.99));
    }

    #[test]
    fn test_sort_spec_from_key() {
        assert_eq!(SortSpec::from_key("recommended"), SortSpec::Recommended);
        assert_eq!(
            SortSpec::from_key("price-low"),
            SortSpec::ByField(SortField::PriceLow)
        );
        assert_eq!(
            SortSpec::from_key("PRICE-HIGH"),
            SortSpec::ByField(SortField::PriceHigh)
        );
        assert_eq!(SortSpec::from_key("none"), SortSpec::Unsorted);
        assert_eq!(SortSpec::from_key("bogus"), SortSpec::Unsorted);
    }

    #[test]
    fn test_view_mode_from_str() {
        assert_eq!(ViewMode::from_str("map").unwrap(), ViewMode::Map);
        assert_eq!(ViewMode::from_str("LIST").unwrap(), ViewMode::List);
        assert!(ViewMode::from_str("grid").is_err());
    }

    #[test]
    fn test_default_filter_state() {
        let state = FilterState::default();
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(state.sort, SortSpec::Unsorted);
        assert!(!state.has_facets());
    }

    #[test]
    fn test_normalized_swaps_inverted_price_range() {
        let state = FilterState {
            min_price: Some(3000),
            max_price: Some(500),
            ..FilterState::default()
        }
        .normalized();
        assert_eq!(state.min_price, Some(500));
        assert_eq!(state.max_price, Some(3000));
    }

    #[test]
    fn test_normalized_repairs_pagination_and_blanks() {
        let state = FilterState {
            search_text: Some("   ".to_string()),
            occasion: Some(" wedding ".to_string()),
            page: 0,
            page_size: 0,
            ..FilterState::default()
        }
        .normalized();
        assert_eq!(state.search_text, None);
        assert_eq!(state.occasion.as_deref(), Some("wedding"));
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_normalized_is_idempotent() {
        let state = FilterState {
            min_price: Some(10),
            max_price: Some(5),
            page_size: 500,
            ..FilterState::default()
        }
        .normalized();
        assert_eq!(state.clone().normalized(), state);
        assert_eq!(state.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_is_recommended_derived_from_sort() {
        let state = FilterState {
            sort: SortSpec::Recommended,
            ..FilterState::default()
        };
        assert!(state.is_recommended());
        assert!(state.has_facets());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(Some("1500")), Some(1500));
        assert_eq!(parse_price(Some(" 499.99 ")), Some(499));
        assert_eq!(parse_price(Some("0")), Some(0));
        assert_eq!(parse_price(Some("-5")), None);
        assert_eq!(parse_price(Some("NaN")), None);
        assert_eq!(parse_price(Some("inf")), None);
        assert_eq!(parse_price(Some("abc")), None);
        assert_eq!(parse_price(None), None);
    }

    #[test]
    fn test_with_page_keeps_facets() {
        let state = FilterState {
            occasion: Some("wedding".to_string()),
            ..FilterState::default()
        };
        let next = state.with_page(3);
        assert_eq!(next.page, 3);
        assert_eq!(next.occasion, state.occasion);
        assert_eq!(state.with_page(0).page, 1);
    }
}
