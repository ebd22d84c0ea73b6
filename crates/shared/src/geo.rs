//! District geometry documents: a polygon boundary set and a label-anchor
//! point set, both GeoJSON feature collections joined to district records by
//! the `BYDELSNAVN` property.

use serde::Deserialize;

use crate::viewport::LatLng;

pub const BOUNDARIES_FILE: &str = "oslo_bydeler.geojson";
pub const LABEL_POINTS_FILE: &str = "oslo_label_points.geojson";

/// GeoJSON position: `[longitude, latitude]`, optionally followed by altitude.
type Position = Vec<f64>;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Point { coordinates: Position },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FeatureProperties {
    #[serde(rename = "BYDELSNAVN")]
    district_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<FeatureProperties>,
    geometry: Option<Geometry>,
}

impl Feature {
    fn name(&self) -> Option<&str> {
        self.properties.as_ref()?.district_name.as_deref()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

fn to_lat_lng(pos: &Position) -> Option<LatLng> {
    match pos.as_slice() {
        [lng, lat, ..] => Some(LatLng::new(*lat, *lng)),
        _ => None,
    }
}

fn to_ring(ring: &[Position]) -> Vec<LatLng> {
    ring.iter().filter_map(to_lat_lng).collect()
}

/// A district boundary. Multipolygons are flattened into one ring list and
/// drawn with the even-odd rule, which keeps holes open.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionShape {
    pub name: String,
    pub rings: Vec<Vec<LatLng>>,
}

impl RegionShape {
    /// Even-odd containment over all rings, in planar lng/lat.
    pub fn contains(&self, point: LatLng) -> bool {
        self.rings
            .iter()
            .filter(|ring| ring_contains(ring, point))
            .count()
            % 2
            == 1
    }
}

fn ring_contains(ring: &[LatLng], p: LatLng) -> bool {
    let mut inside = false;
    let mut j = match ring.len() {
        0 => return false,
        n => n - 1,
    };
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a.lat > p.lat) != (b.lat > p.lat)
            && p.lng < (b.lng - a.lng) * (p.lat - a.lat) / (b.lat - a.lat) + a.lng
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelPoint {
    pub name: String,
    pub position: LatLng,
}

impl FeatureCollection {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Named polygon features. Points and unsupported geometries are skipped.
    pub fn region_shapes(&self) -> Vec<RegionShape> {
        self.features
            .iter()
            .filter_map(|f| {
                let name = f.name()?;
                let rings: Vec<Vec<LatLng>> = match f.geometry.as_ref()? {
                    Geometry::Polygon { coordinates } => {
                        coordinates.iter().map(|r| to_ring(r)).collect()
                    }
                    Geometry::MultiPolygon { coordinates } => coordinates
                        .iter()
                        .flat_map(|poly| poly.iter().map(|r| to_ring(r)))
                        .collect(),
                    _ => return None,
                };
                Some(RegionShape {
                    name: name.to_string(),
                    rings,
                })
            })
            .collect()
    }

    /// Named point features.
    pub fn label_points(&self) -> Vec<LabelPoint> {
        self.features
            .iter()
            .filter_map(|f| {
                let name = f.name()?;
                match f.geometry.as_ref()? {
                    Geometry::Point { coordinates } => Some(LabelPoint {
                        name: name.to_string(),
                        position: to_lat_lng(coordinates)?,
                    }),
                    _ => None,
                }
            })
            .collect()
    }
}

/// Both geometry documents, parsed and ready to render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistrictGeometry {
    pub regions: Vec<RegionShape>,
    pub labels: Vec<LabelPoint>,
}

impl DistrictGeometry {
    pub fn from_collections(boundaries: &FeatureCollection, label_points: &FeatureCollection) -> Self {
        Self {
            regions: boundaries.region_shapes(),
            labels: label_points.label_points(),
        }
    }
}
