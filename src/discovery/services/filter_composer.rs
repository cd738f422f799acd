use crate::discovery::domain::filter_state::parse_price;
use crate::discovery::domain::{
    City, FilterState, ListingRequest, RatingFloor, SortSpec, DEFAULT_PAGE_SIZE,
};
use crate::discovery::services::query_codec::{QueryState, QueryStateCodec};
use crate::ports::outbound::{NavigationEntry, Navigator, ScrollBehavior};
use tracing::debug;

/// Raw control values as produced by the filter UI
#[derive(Debug, Clone, Default)]
pub struct RawFilterInput {
    pub search: Option<String>,
    pub location: Option<String>,
    pub main_category: Option<String>,
    pub sub_category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub rating: Option<String>,
    pub occasion: Option<String>,
    pub sort: Option<String>,
    pub is_recommended: bool,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

/// Filter values fixed by the hosting page.
///
/// An engine embedded in a category page pins `main_category`; pinned values
/// override whatever the controls say.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseFilter {
    pub main_category: Option<String>,
    pub location: Option<City>,
}

impl BaseFilter {
    pub fn for_category(category: impl Into<String>) -> Self {
        Self {
            main_category: Some(category.into()),
            location: None,
        }
    }

    pub fn apply(&self, mut state: FilterState) -> FilterState {
        if let Some(category) = &self.main_category {
            state.main_category = Some(category.clone());
        }
        if let Some(city) = &self.location {
            state.location = Some(city.clone());
        }
        state
    }
}

/// A single facet interaction from a filter control
#[derive(Debug, Clone, PartialEq)]
pub enum FacetSelection {
    Search(String),
    MainCategory(String),
    /// Single-select pill; selecting the current value clears it
    SubCategory(String),
    /// Single-select pill; selecting the current value clears it
    Rating(RatingFloor),
    /// Single-select pill; selecting the current value clears it
    Occasion(String),
    /// Single-select pill; selecting the current value clears it
    Location(City),
    PriceRange { min: Option<u64>, max: Option<u64> },
    Sort(SortSpec),
    ClearAll,
}

/// FilterComposer - turns raw control input into a canonical [`ListingRequest`]
///
/// Composition never fails. Malformed input is repaired or dropped:
/// inverted price ranges are swapped, ratings outside 1..=5 are dropped,
/// unparseable pages become page 1.
pub struct FilterComposer {
    base: BaseFilter,
}

impl FilterComposer {
    pub fn new(base: BaseFilter) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseFilter {
        &self.base
    }

    /// Composes a request from raw control values
    pub fn compose(&self, raw: &RawFilterInput) -> ListingRequest {
        let location = raw.location.as_deref().and_then(|value| {
            if value.trim().is_empty() {
                return None;
            }
            City::new(value)
                .map_err(|e| debug!(value, error = %e, "Dropping invalid location"))
                .ok()
        });

        let mut sort = raw
            .sort
            .as_deref()
            .map(SortSpec::from_key)
            .unwrap_or_default();
        if sort == SortSpec::Unsorted && raw.is_recommended {
            sort = SortSpec::Recommended;
        }

        let state = FilterState {
            search_text: raw.search.clone(),
            location,
            main_category: raw.main_category.clone(),
            sub_category: raw.sub_category.clone(),
            min_price: parse_price(raw.min_price.as_deref()),
            max_price: parse_price(raw.max_price.as_deref()),
            rating_floor: parse_rating(raw.rating.as_deref()),
            occasion: raw.occasion.clone(),
            sort,
            page: parse_page(raw.page.as_deref()),
            page_size: parse_page_size(raw.page_size.as_deref()),
        };

        self.base.apply(state).normalized()
    }

    /// Applies one facet interaction to `current`.
    ///
    /// Any facet change returns to page 1.
    pub fn toggle(&self, current: &FilterState, selection: FacetSelection) -> ListingRequest {
        let mut next = current.clone();

        match selection {
            FacetSelection::Search(text) => next.search_text = Some(text),
            FacetSelection::MainCategory(category) => {
                if next.main_category.as_deref() != Some(category.as_str()) {
                    next.sub_category = None;
                }
                next.main_category = Some(category);
            }
            FacetSelection::SubCategory(value) => {
                next.sub_category = toggled(next.sub_category, value)
            }
            FacetSelection::Rating(floor) => next.rating_floor = toggled(next.rating_floor, floor),
            FacetSelection::Occasion(value) => next.occasion = toggled(next.occasion, value),
            FacetSelection::Location(city) => next.location = toggled(next.location, city),
            FacetSelection::PriceRange { min, max } => {
                next.min_price = min;
                next.max_price = max;
            }
            FacetSelection::Sort(sort) => next.sort = sort,
            FacetSelection::ClearAll => {
                next = FilterState {
                    page_size: current.page_size,
                    ..FilterState::default()
                }
            }
        }

        next.page = 1;
        self.base.apply(next).normalized()
    }

    /// Pushes the encoded state as a new history entry without scrolling.
    pub fn commit<N>(&self, state: &QueryState, navigator: &N) -> NavigationEntry
    where
        N: Navigator + ?Sized,
    {
        let entry = NavigationEntry::new(
            QueryStateCodec::encode_to_string(state),
            ScrollBehavior::Preserve,
        );
        debug!(query = %entry.query, "Committing filter state");
        navigator.push(entry.clone());
        entry
    }
}

impl Default for FilterComposer {
    fn default() -> Self {
        Self::new(BaseFilter::default())
    }
}

fn toggled<T: PartialEq>(current: Option<T>, selected: T) -> Option<T> {
    match current {
        Some(value) if value == selected => None,
        _ => Some(selected),
    }
}

/// Exact star value 1..=5; anything else is dropped
fn parse_rating(raw: Option<&str>) -> Option<RatingFloor> {
    let value = raw?.trim().parse::<f64>().ok()?;
    if value.fract() != 0.0 {
        return None;
    }
    RatingFloor::new(value as i64)
}

fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.trim().parse::<i64>().ok())
        .map(|p| p.clamp(1, i64::from(u32::MAX)) as u32)
        .unwrap_or(1)
}

fn parse_page_size(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|size| *size > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}
