use super::vendor_card::VendorLinks;
use crate::discovery::domain::{Coordinates, VendorId, VendorSummary};
use crate::discovery::services::{Bounds, GeoLocator, MarkerCluster, MarkerGlyph};
use serde::Serialize;

/// Placeholder text shown when no vendor on the page can be placed
pub const NO_LOCATED_VENDORS_MESSAGE: &str = "None of these vendors have a location to show on the map yet.";

/// Content of the popup attached to a marker
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupSummary {
    pub name: String,
    pub rating: f64,
    pub price_from: u64,
    pub cover_image: Option<String>,
    pub profile_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerView {
    pub vendor_id: VendorId,
    pub position: Coordinates,
    pub glyph: MarkerGlyph,
    pub popup: PopupSummary,
}

/// Map side of the map view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum MapPanel {
    Located {
        center: Coordinates,
        bounds: Bounds,
        markers: Vec<MarkerView>,
        /// Present only for dense result sets
        clusters: Option<Vec<MarkerCluster>>,
    },
    NoLocatedVendors { message: String },
}

impl MapPanel {
    pub fn build(vendors: &[VendorSummary], locator: &GeoLocator, links: &VendorLinks) -> Self {
        let Some(layout) = locator.layout(vendors) else {
            return MapPanel::NoLocatedVendors {
                message: NO_LOCATED_VENDORS_MESSAGE.to_string(),
            };
        };

        let markers = layout
            .markers
            .into_iter()
            .filter_map(|marker| {
                let vendor = vendors.iter().find(|v| v.id == marker.vendor_id)?;
                Some(MarkerView {
                    popup: PopupSummary {
                        name: vendor.name.clone(),
                        rating: vendor.rating,
                        price_from: vendor.starting_price,
                        cover_image: vendor.cover_image().map(str::to_string),
                        profile_url: links.profile_path(vendor),
                    },
                    vendor_id: marker.vendor_id,
                    position: marker.position,
                    glyph: marker.glyph,
                })
            })
            .collect();

        MapPanel::Located {
            center: layout.center,
            bounds: layout.bounds,
            markers,
            clusters: layout.clusters,
        }
    }

    pub fn markers(&self) -> &[MarkerView] {
        match self {
            MapPanel::Located { markers, .. } => markers,
            MapPanel::NoLocatedVendors { .. } => &[],
        }
    }
}
