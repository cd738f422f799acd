use crate::discovery::domain::{page_count, ListingResult, SortField, SortSpec, VendorSummary};

/// ListingOrder - ordering and pagination rules for a filtered vendor set
///
/// Sorting is stable, so vendors with equal keys keep catalog order.
/// `Unsorted` and `Recommended` keep catalog order entirely.
pub struct ListingOrder;

impl ListingOrder {
    pub fn sort(vendors: &mut [VendorSummary], sort: SortSpec) {
        match sort {
            SortSpec::Unsorted | SortSpec::Recommended => {}
            SortSpec::ByField(SortField::PriceLow) => {
                vendors.sort_by_key(|v| v.starting_price);
            }
            SortSpec::ByField(SortField::PriceHigh) => {
                vendors.sort_by(|a, b| b.starting_price.cmp(&a.starting_price));
            }
            SortSpec::ByField(SortField::Rating) => {
                vendors.sort_by(|a, b| b.rating.total_cmp(&a.rating));
            }
        }
    }

    /// Cuts page `page` (1-based) out of `vendors`.
    ///
    /// A page past the end yields an empty result, not an error.
    pub fn paginate(vendors: Vec<VendorSummary>, page: u32, page_size: u32) -> ListingResult {
        let page = page.max(1);
        let total_pages = page_count(vendors.len(), page_size);
        let start = (page as usize - 1).saturating_mul(page_size as usize);

        let items = vendors
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();

        ListingResult::new(items, page, total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::domain::vendor::test_support::vendor;

    fn prices(vendors: &[VendorSummary]) -> Vec<u64> {
        vendors.iter().map(|v| v.starting_price).collect()
    }

    fn sample() -> Vec<VendorSummary> {
        vec![
            vendor("a", 300, 4.1),
            vendor("b", 100, 3.0),
            vendor("c", 200, 4.9),
            vendor("d", 100, 4.5),
        ]
    }

    #[test]
    fn test_sort_price_low_is_non_decreasing_and_stable() {
        let mut vendors = sample();
        ListingOrder::sort(&mut vendors, SortSpec::ByField(SortField::PriceLow));
        assert_eq!(prices(&vendors), vec![100, 100, 200, 300]);
        assert_eq!(vendors[0].id.as_str(), "b");
        assert_eq!(vendors[1].id.as_str(), "d");
    }

    #[test]
    fn test_sort_price_high_is_non_increasing() {
        let mut vendors = sample();
        ListingOrder::sort(&mut vendors, SortSpec::ByField(SortField::PriceHigh));
        assert!(prices(&vendors).windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_sort_rating_descending() {
        let mut vendors = sample();
        ListingOrder::sort(&mut vendors, SortSpec::ByField(SortField::Rating));
        let ratings: Vec<f64> = vendors.iter().map(|v| v.rating).collect();
        assert_eq!(ratings, vec![4.9, 4.5, 4.1, 3.0]);
    }

    #[test]
    fn test_unsorted_keeps_catalog_order() {
        let mut vendors = sample();
        ListingOrder::sort(&mut vendors, SortSpec::Unsorted);
        assert_eq!(prices(&vendors), vec![300, 100, 200, 100]);
    }

    #[test]
    fn test_paginate_pages() {
        let vendors: Vec<_> = (0..25).map(|i| vendor(&format!("v{}", i), i, 4.0)).collect();

        let first = ListingOrder::paginate(vendors.clone(), 1, 12);
        assert_eq!(first.items().len(), 12);
        assert_eq!(first.total_pages(), 3);

        let last = ListingOrder::paginate(vendors.clone(), 3, 12);
        assert_eq!(last.items().len(), 1);
        assert_eq!(last.items()[0].id.as_str(), "v24");
    }

    #[test]
    fn test_paginate_past_end_is_empty() {
        let vendors: Vec<_> = (0..5).map(|i| vendor(&format!("v{}", i), i, 4.0)).collect();
        let result = ListingOrder::paginate(vendors, 2, 12);
        assert!(result.is_empty());
        assert_eq!(result.total_pages(), 1);
        assert_eq!(result.current_page(), 2);
    }
}
