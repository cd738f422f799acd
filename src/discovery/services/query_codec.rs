//! Bidirectional mapping between [`FilterState`] + [`ViewMode`] and URL query
//! parameters.
//!
//! Encoding omits every default so that shared URLs stay short. Decoding never
//! fails: unknown keys are ignored and malformed values fall back to their
//! defaults.

use crate::discovery::domain::filter_state::parse_price;
use crate::discovery::domain::{
    City, FilterState, RatingFloor, SortField, SortSpec, ViewMode, DEFAULT_PAGE_SIZE,
};
use std::fmt;
use tracing::debug;

pub const KEY_SEARCH: &str = "search";
pub const KEY_LOCATION: &str = "location";
pub const KEY_MAIN_CATEGORY: &str = "mainCategory";
pub const KEY_SUB_CATEGORY: &str = "subCategory";
pub const KEY_MIN_PRICE: &str = "minPrice";
pub const KEY_MAX_PRICE: &str = "maxPrice";
pub const KEY_RATING: &str = "rating";
pub const KEY_SORT: &str = "sort";
pub const KEY_OCCASION: &str = "occasion";
pub const KEY_IS_RECOMMENDED: &str = "isRecommended";
pub const KEY_PAGE: &str = "page";
pub const KEY_PAGE_SIZE: &str = "pageSize";
pub const KEY_VIEW: &str = "view";

/// Filter and view state as carried by a navigable location
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub filter: FilterState,
    pub view: ViewMode,
}

impl QueryState {
    pub fn new(filter: FilterState, view: ViewMode) -> Self {
        Self { filter, view }
    }
}

/// Ordered list of query key/value pairs (unencoded)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        self.0.push((key.to_string(), value.into()));
    }

    /// Last value for `key`; later duplicates override earlier ones
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses `a=1&b=two` (a leading `?` is allowed).
    ///
    /// `+` is read as a space. Pairs whose percent-encoding is not valid UTF-8
    /// are skipped.
    pub fn parse(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut params = Self::new();

        for segment in query.split('&').filter(|s| !s.is_empty()) {
            let (raw_key, raw_value) = segment.split_once('=').unwrap_or((segment, ""));
            match (decode_component(raw_key), decode_component(raw_value)) {
                (Some(key), Some(value)) => params.0.push((key, value)),
                _ => debug!(segment, "Skipping undecodable query segment"),
            }
        }

        params
    }

    /// Serializes to `a=1&b=two` with percent-encoded keys and values
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|s| s.into_owned())
}

/// Query-state codec
pub struct QueryStateCodec;

impl QueryStateCodec {
    /// Encodes state into query parameters, omitting defaults.
    pub fn encode(state: &QueryState) -> QueryParams {
        let filter = &state.filter;
        let mut params = QueryParams::new();

        push_text(&mut params, KEY_SEARCH, filter.search_text.as_deref());
        push_text(
            &mut params,
            KEY_LOCATION,
            filter.location.as_ref().map(City::as_str),
        );
        push_text(&mut params, KEY_MAIN_CATEGORY, filter.main_category.as_deref());
        push_text(&mut params, KEY_SUB_CATEGORY, filter.sub_category.as_deref());
        if let Some(min) = filter.min_price {
            params.push(KEY_MIN_PRICE, min.to_string());
        }
        if let Some(max) = filter.max_price {
            params.push(KEY_MAX_PRICE, max.to_string());
        }
        if let Some(floor) = filter.rating_floor {
            params.push(KEY_RATING, floor.stars().to_string());
        }
        match filter.sort {
            SortSpec::Unsorted => {}
            SortSpec::ByField(field) => params.push(KEY_SORT, field.as_str()),
            SortSpec::Recommended => params.push(KEY_IS_RECOMMENDED, "true"),
        }
        push_text(&mut params, KEY_OCCASION, filter.occasion.as_deref());
        if filter.page > 1 {
            params.push(KEY_PAGE, filter.page.to_string());
        }
        if filter.page_size != DEFAULT_PAGE_SIZE {
            params.push(KEY_PAGE_SIZE, filter.page_size.to_string());
        }
        if state.view != ViewMode::default() {
            params.push(KEY_VIEW, state.view.as_str());
        }

        params
    }

    /// Encodes state straight to a query string
    pub fn encode_to_string(state: &QueryState) -> String {
        Self::encode(state).to_query_string()
    }

    /// Decodes a raw query string. Never fails.
    pub fn decode(query: &str) -> QueryState {
        Self::decode_params(&QueryParams::parse(query))
    }

    /// Decodes already-split parameters. Never fails.
    pub fn decode_params(params: &QueryParams) -> QueryState {
        let text = |key: &str| params.get(key).map(str::to_string);

        let location = params.get(KEY_LOCATION).and_then(|raw| match City::new(raw) {
            Ok(city) => Some(city),
            Err(e) => {
                debug!(raw, error = %e, "Dropping invalid location");
                None
            }
        });

        let rating_floor = params
            .get(KEY_RATING)
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .and_then(RatingFloor::new);

        let page = params
            .get(KEY_PAGE)
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(|p| p.clamp(1, i64::from(u32::MAX)) as u32)
            .unwrap_or(1);

        let page_size = params
            .get(KEY_PAGE_SIZE)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let view = params
            .get(KEY_VIEW)
            .and_then(|raw| raw.parse::<ViewMode>().ok())
            .unwrap_or_default();

        let filter = FilterState {
            search_text: text(KEY_SEARCH),
            location,
            main_category: text(KEY_MAIN_CATEGORY),
            sub_category: text(KEY_SUB_CATEGORY),
            min_price: parse_price(params.get(KEY_MIN_PRICE)),
            max_price: parse_price(params.get(KEY_MAX_PRICE)),
            rating_floor,
            occasion: text(KEY_OCCASION),
            sort: decode_sort(params.get(KEY_SORT), params.get(KEY_IS_RECOMMENDED)),
            page,
            page_size,
        }
        .normalized();

        QueryState { filter, view }
    }
}

fn push_text(params: &mut QueryParams, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        params.push(key, value);
    }
}

/// An explicit field sort wins over the recommended flag; `sort=recommended`
/// is accepted as an alternate spelling of `isRecommended=true`.
fn decode_sort(sort: Option<&str>, is_recommended: Option<&str>) -> SortSpec {
    if let Some(field) = sort.and_then(|s| s.parse::<SortField>().ok()) {
        return SortSpec::ByField(field);
    }

    let flagged = is_recommended
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let spelled = sort
        .map(|s| s.trim().eq_ignore_ascii_case("recommended"))
        .unwrap_or(false);

    if flagged || spelled {
        SortSpec::Recommended
    } else {
        SortSpec::Unsorted
    }
}
