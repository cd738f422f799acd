use crate::application::read_models::{
    CompactCard, DiscoveryView, MapPanel, PaginationView, VendorCard, ViewBody,
};
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;

/// Markdown table header for list cards
const CARD_TABLE_HEADER: &str = "| Vendor | Rating | From | Categories | About | Saved | Links |\n";

/// Markdown table separator line for list cards
const CARD_TABLE_SEPARATOR: &str = "|--------|--------|------|------------|-------|-------|-------|\n";

/// Markdown table header for compact cards
const COMPACT_TABLE_HEADER: &str = "| Vendor | Rating | From | Category | On map | Saved |\n";

/// Markdown table separator line for compact cards
const COMPACT_TABLE_SEPARATOR: &str = "|--------|--------|------|----------|--------|-------|\n";

/// Markdown table header for map markers
const MARKER_TABLE_HEADER: &str = "| Vendor | Latitude | Longitude | Marker |\n";

/// Markdown table separator line for map markers
const MARKER_TABLE_SEPARATOR: &str = "|--------|----------|-----------|--------|\n";

/// MarkdownFormatter adapter for a human-readable rendering of a view
///
/// This adapter implements the ViewFormatter port for Markdown format.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn format_rating(rating: f64) -> String {
        format!("★ {:.1}", rating)
    }

    fn saved_mark(saved: bool) -> &'static str {
        if saved {
            "♥"
        } else {
            ""
        }
    }

    fn vendor_name(name: &str, is_recommended: bool) -> String {
        let name = Self::escape_markdown_table_cell(name);
        if is_recommended {
            format!("{} (recommended)", name)
        } else {
            name
        }
    }

    fn query_link(query: &str) -> String {
        if query.is_empty() {
            "`?`".to_string()
        } else {
            format!("`?{}`", query)
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, view: &DiscoveryView) {
        output.push_str("# Vendor Discovery\n\n");
        output.push_str(&format!(
            "- View: {}\n- Query: {}\n- Rendered: {}\n\n",
            view.mode,
            Self::query_link(&view.query),
            view.metadata.rendered_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    fn render_cards(&self, output: &mut String, cards: &[VendorCard]) {
        output.push_str("## Vendors\n\n");
        output.push_str(CARD_TABLE_HEADER);
        output.push_str(CARD_TABLE_SEPARATOR);

        for card in cards {
            output.push_str(&format!(
                "| [{}]({}) | {} | {} | {} | {} | {} | [Share]({}) · [Compare]({}) |\n",
                Self::vendor_name(&card.name, card.is_recommended),
                card.profile_url,
                Self::format_rating(card.rating),
                card.price_from,
                Self::escape_markdown_table_cell(&card.categories.join(", ")),
                Self::escape_markdown_table_cell(&card.short_description),
                Self::saved_mark(card.saved),
                card.share_url,
                card.compare_url
            ));
        }
        output.push('\n');
    }

    fn render_compact_cards(&self, output: &mut String, cards: &[CompactCard]) {
        output.push_str("## Vendors\n\n");
        output.push_str(COMPACT_TABLE_HEADER);
        output.push_str(COMPACT_TABLE_SEPARATOR);

        for card in cards {
            output.push_str(&format!(
                "| [{}]({}) | {} | {} | {} | {} | {} |\n",
                Self::vendor_name(&card.name, card.is_recommended),
                card.profile_url,
                Self::format_rating(card.rating),
                card.price_from,
                Self::escape_markdown_table_cell(card.primary_category.as_deref().unwrap_or("")),
                if card.located { "yes" } else { "no" },
                Self::saved_mark(card.saved)
            ));
        }
        output.push('\n');
    }

    fn render_map(&self, output: &mut String, map: &MapPanel) {
        output.push_str("## Map\n\n");
        match map {
            MapPanel::NoLocatedVendors { message } => {
                output.push_str(&format!("_{}_\n\n", message));
            }
            MapPanel::Located {
                center,
                bounds,
                markers,
                clusters,
            } => {
                output.push_str(&format!(
                    "Centered on {:.4}, {:.4} (bounds {:.4}, {:.4} to {:.4}, {:.4})\n\n",
                    center.lat,
                    center.lng,
                    bounds.south_west.lat,
                    bounds.south_west.lng,
                    bounds.north_east.lat,
                    bounds.north_east.lng
                ));

                match clusters {
                    Some(clusters) => {
                        output.push_str(&format!(
                            "{} markers grouped into {} clusters.\n\n",
                            markers.len(),
                            clusters.len()
                        ));
                    }
                    None => {
                        output.push_str(MARKER_TABLE_HEADER);
                        output.push_str(MARKER_TABLE_SEPARATOR);
                        for marker in markers {
                            output.push_str(&format!(
                                "| {} | {:.5} | {:.5} | {:?} |\n",
                                Self::escape_markdown_table_cell(&marker.popup.name),
                                marker.position.lat,
                                marker.position.lng,
                                marker.glyph
                            ));
                        }
                        output.push('\n');
                    }
                }
            }
        }
    }

    fn render_pagination(&self, output: &mut String, pagination: Option<&PaginationView>) {
        let Some(pagination) = pagination else {
            return;
        };
        output.push_str(&format!(
            "Page {} of {}\n\n",
            pagination.current_page, pagination.total_pages
        ));
        if let Some(previous) = &pagination.previous {
            output.push_str(&format!("- Previous: {}\n", Self::query_link(&previous.query)));
        }
        if let Some(next) = &pagination.next {
            output.push_str(&format!("- Next: {}\n", Self::query_link(&next.query)));
        }
        output.push('\n');
    }
}

impl ViewFormatter for MarkdownFormatter {
    fn format(&self, view: &DiscoveryView) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, view);

        match &view.body {
            ViewBody::List { cards, pagination } => {
                self.render_cards(&mut output, cards);
                self.render_pagination(&mut output, pagination.as_ref());
            }
            ViewBody::Map {
                compact_cards,
                map,
                pagination,
            } => {
                self.render_compact_cards(&mut output, compact_cards);
                self.render_map(&mut output, map);
                self.render_pagination(&mut output, pagination.as_ref());
            }
            ViewBody::NoResults {
                filters_applied,
                clear_filters_query,
            } => {
                output.push_str("## No vendors found\n\n");
                if *filters_applied {
                    output.push_str(&format!(
                        "No vendors match these filters. Clear them: {}\n",
                        Self::query_link(clear_filters_query)
                    ));
                } else {
                    output.push_str("There are no vendors listed yet.\n");
                }
            }
            ViewBody::Error {
                message,
                retry_query,
                ..
            } => {
                output.push_str("## Something went wrong\n\n");
                output.push_str(&format!("{}\n\n", message));
                output.push_str(&format!("Retry: {}\n", Self::query_link(retry_query)));
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{DiscoveryMetadata, DiscoveryViewBuilder, VendorLinks};
    use crate::discovery::domain::vendor::test_support::vendor;
    use crate::discovery::domain::{
        Coordinates, EngineToken, FilterState, ListingResult, SavedVendorSet, ViewMode,
    };
    use crate::discovery::services::{GeoLocator, QueryState};

    fn render(mode: ViewMode, result: ListingResult) -> String {
        let builder =
            DiscoveryViewBuilder::new(VendorLinks::new("https://x.test"), GeoLocator::default());
        let view = builder.build(
            &QueryState::new(FilterState::default(), mode),
            &result,
            &SavedVendorSet::new(),
            DiscoveryMetadata::new(EngineToken::generate(), 1),
        );
        MarkdownFormatter::new().format(&view).unwrap()
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }

    #[test]
    fn test_list_rendering() {
        let mut v = vendor("lens", 2500, 4.55);
        v.name = "Lens | Light".to_string();
        v.is_recommended = true;
        let output = render(ViewMode::List, ListingResult::new(vec![v], 1, 1));

        assert!(output.starts_with("# Vendor Discovery"));
        assert!(output.contains("Lens \\| Light (recommended)"));
        assert!(output.contains("[Compare](/compare?vendors=lens)"));
        assert!(!output.contains("Page 1 of"));
    }

    #[test]
    fn test_map_rendering_with_markers_and_pagination() {
        let mut v = vendor("a", 100, 4.0);
        v.coordinates = Some(Coordinates {
            lat: 19.0,
            lng: 72.8,
        });
        let output = render(ViewMode::Map, ListingResult::new(vec![v], 1, 2));

        assert!(output.contains("## Map"));
        assert!(output.contains("| Vendor a | 19.00000 | 72.80000 | Standard |"));
        assert!(output.contains("Page 1 of 2"));
        assert!(output.contains("- Next: `?page=2&view=map`"));
    }

    #[test]
    fn test_map_placeholder() {
        let output = render(
            ViewMode::Map,
            ListingResult::new(vec![vendor("a", 1, 1.0)], 1, 1),
        );
        assert!(output.contains("None of these vendors have a location"));
    }

    #[test]
    fn test_no_results_rendering() {
        let output = render(ViewMode::List, ListingResult::new(Vec::new(), 1, 0));
        assert!(output.contains("## No vendors found"));
    }
}
