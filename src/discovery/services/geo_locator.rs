use crate::discovery::domain::{Coordinates, VendorId, VendorSummary};
use serde::Serialize;
use std::collections::BTreeMap;

/// Map center used when no vendor in the result set has coordinates (Mumbai)
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 19.0760,
    lng: 72.8777,
};

/// Marker count above which markers are grouped into grid clusters
pub const DEFAULT_CLUSTER_THRESHOLD: usize = 200;

/// Grid cell size for clustering, in degrees
pub const DEFAULT_CLUSTER_CELL_DEGREES: f64 = 0.05;

/// Marker glyph variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerGlyph {
    Recommended,
    Standard,
}

/// One vendor placed on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub vendor_id: VendorId,
    pub position: Coordinates,
    pub glyph: MarkerGlyph,
}

/// South-west / north-east bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
}

/// A group of nearby markers shown as a single pin
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerCluster {
    pub position: Coordinates,
    pub vendor_ids: Vec<VendorId>,
    pub has_recommended: bool,
}

impl MarkerCluster {
    pub fn size(&self) -> usize {
        self.vendor_ids.len()
    }
}

/// Everything the map panel needs for one result set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLayout {
    pub center: Coordinates,
    pub bounds: Bounds,
    pub markers: Vec<MapMarker>,
    /// Present only when the marker count exceeds the cluster threshold
    pub clusters: Option<Vec<MarkerCluster>>,
}

/// GeoLocator - computes map center, markers, bounds and clusters
#[derive(Debug, Clone)]
pub struct GeoLocator {
    fallback_center: Coordinates,
    cluster_threshold: usize,
    cluster_cell_degrees: f64,
}

impl GeoLocator {
    pub fn new(
        fallback_center: Coordinates,
        cluster_threshold: usize,
        cluster_cell_degrees: f64,
    ) -> Self {
        let cluster_cell_degrees = if cluster_cell_degrees.is_finite() && cluster_cell_degrees > 0.0
        {
            cluster_cell_degrees
        } else {
            DEFAULT_CLUSTER_CELL_DEGREES
        };
        Self {
            fallback_center,
            cluster_threshold,
            cluster_cell_degrees,
        }
    }

    pub fn fallback_center(&self) -> Coordinates {
        self.fallback_center
    }

    /// Arithmetic mean of all known vendor coordinates, or the fallback center
    pub fn center(&self, vendors: &[VendorSummary]) -> Coordinates {
        let located: Vec<Coordinates> = vendors.iter().filter_map(|v| v.located_at()).collect();
        mean(&located).unwrap_or(self.fallback_center)
    }

    /// Markers for vendors that have coordinates; the rest are left off the map
    pub fn markers(&self, vendors: &[VendorSummary]) -> Vec<MapMarker> {
        vendors
            .iter()
            .filter_map(|vendor| {
                vendor.located_at().map(|position| MapMarker {
                    vendor_id: vendor.id.clone(),
                    position,
                    glyph: if vendor.is_recommended {
                        MarkerGlyph::Recommended
                    } else {
                        MarkerGlyph::Standard
                    },
                })
            })
            .collect()
    }

    pub fn bounds(markers: &[MapMarker]) -> Option<Bounds> {
        let first = markers.first()?.position;
        let mut bounds = Bounds {
            south_west: first,
            north_east: first,
        };
        for marker in &markers[1..] {
            let p = marker.position;
            bounds.south_west.lat = bounds.south_west.lat.min(p.lat);
            bounds.south_west.lng = bounds.south_west.lng.min(p.lng);
            bounds.north_east.lat = bounds.north_east.lat.max(p.lat);
            bounds.north_east.lng = bounds.north_east.lng.max(p.lng);
        }
        Some(bounds)
    }

    /// Groups markers into square grid cells of `cluster_cell_degrees`.
    /// Output order is deterministic (by cell).
    pub fn cluster(&self, markers: &[MapMarker]) -> Vec<MarkerCluster> {
        let cell = self.cluster_cell_degrees;
        let mut cells: BTreeMap<(i64, i64), Vec<&MapMarker>> = BTreeMap::new();
        for marker in markers {
            let key = (
                (marker.position.lat / cell).floor() as i64,
                (marker.position.lng / cell).floor() as i64,
            );
            cells.entry(key).or_default().push(marker);
        }

        cells
            .into_values()
            .map(|members| {
                let positions: Vec<Coordinates> = members.iter().map(|m| m.position).collect();
                MarkerCluster {
                    // cells are never empty
                    position: mean(&positions).unwrap_or(self.fallback_center),
                    vendor_ids: members.iter().map(|m| m.vendor_id.clone()).collect(),
                    has_recommended: members
                        .iter()
                        .any(|m| m.glyph == MarkerGlyph::Recommended),
                }
            })
            .collect()
    }

    /// Full map layout, or `None` when no vendor can be placed
    pub fn layout(&self, vendors: &[VendorSummary]) -> Option<MapLayout> {
        let markers = self.markers(vendors);
        let bounds = Self::bounds(&markers)?;
        let clusters = (markers.len() > self.cluster_threshold).then(|| self.cluster(&markers));

        Some(MapLayout {
            center: self.center(vendors),
            bounds,
            markers,
            clusters,
        })
    }
}

impl Default for GeoLocator {
    fn default() -> Self {
        Self::new(
            DEFAULT_CENTER,
            DEFAULT_CLUSTER_THRESHOLD,
            DEFAULT_CLUSTER_CELL_DEGREES,
        )
    }
}

fn mean(points: &[Coordinates]) -> Option<Coordinates> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (lat_sum, lng_sum) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));
    Some(Coordinates {
        lat: lat_sum / n,
        lng: lng_sum / n,
    })
}
