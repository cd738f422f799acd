use crate::discovery::domain::{ListingRequest, VendorSummary};

/// FacetMatcher - decides whether a vendor satisfies every facet of a request
///
/// Text comparisons are case-insensitive. Category facets match against the
/// vendor's category list; `search` matches name, description or any category.
pub struct FacetMatcher<'a> {
    request: &'a ListingRequest,
    search: Option<String>,
}

impl<'a> FacetMatcher<'a> {
    pub fn new(request: &'a ListingRequest) -> Self {
        Self {
            request,
            search: request.search_text.as_ref().map(|s| s.to_lowercase()),
        }
    }

    pub fn matches(&self, vendor: &VendorSummary) -> bool {
        self.matches_search(vendor)
            && self.matches_location(vendor)
            && matches_category(vendor, self.request.main_category.as_deref())
            && matches_category(vendor, self.request.sub_category.as_deref())
            && self.matches_price(vendor)
            && self.matches_rating(vendor)
            && self.matches_occasion(vendor)
            && (!self.request.is_recommended() || vendor.is_recommended)
    }

    fn matches_search(&self, vendor: &VendorSummary) -> bool {
        let Some(needle) = &self.search else {
            return true;
        };
        vendor.name.to_lowercase().contains(needle)
            || vendor.description.to_lowercase().contains(needle)
            || vendor
                .categories
                .iter()
                .any(|c| c.to_lowercase().contains(needle))
    }

    fn matches_location(&self, vendor: &VendorSummary) -> bool {
        match &self.request.location {
            None => true,
            Some(city) => vendor
                .city
                .as_deref()
                .map(|c| c.trim().eq_ignore_ascii_case(city.as_str()))
                .unwrap_or(false),
        }
    }

    fn matches_price(&self, vendor: &VendorSummary) -> bool {
        let price = vendor.starting_price;
        self.request.min_price.is_none_or(|min| price >= min)
            && self.request.max_price.is_none_or(|max| price <= max)
    }

    fn matches_rating(&self, vendor: &VendorSummary) -> bool {
        self.request
            .rating_floor
            .is_none_or(|floor| floor.admits(vendor.rating))
    }

    fn matches_occasion(&self, vendor: &VendorSummary) -> bool {
        match self.request.occasion.as_deref() {
            None => true,
            Some(occasion) => vendor
                .occasions
                .iter()
                .any(|o| o.eq_ignore_ascii_case(occasion)),
        }
    }
}

fn matches_category(vendor: &VendorSummary, category: Option<&str>) -> bool {
    match category {
        None => true,
        Some(category) => vendor
            .categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category)),
    }
}
