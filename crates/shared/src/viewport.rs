//! Web-Mercator viewport math: projection, zoom/pan and the raster tile grid
//! covering the visible area.
//!
//! World coordinates are pixels at a given zoom with a 256 px base tile, the
//! convention the Mapbox raster styles use.

use std::f64::consts::PI;

use crate::theme::TileSource;

pub const BASE_TILE_PX: f64 = 256.0;

/// Viewport widths below this use the mobile default view.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Web-Mercator latitude limit.
const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Mobile,
    Desktop,
}

impl SizeClass {
    pub fn from_width(window_width: f64) -> Self {
        if window_width < MOBILE_BREAKPOINT_PX {
            SizeClass::Mobile
        } else {
            SizeClass::Desktop
        }
    }

    /// Default center and zoom. Mobile is zoomed out to fit every district.
    pub fn default_viewport(self) -> Viewport {
        match self {
            SizeClass::Desktop => Viewport::new(LatLng::new(59.92, 10.76), 11.5),
            SizeClass::Mobile => Viewport::new(LatLng::new(59.91, 10.76), 10.6),
        }
    }
}

/// Size of the map container in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

fn world_size(zoom: f64) -> f64 {
    BASE_TILE_PX * 2f64.powf(zoom)
}

/// Project a coordinate to world pixels at `zoom`.
pub fn project(ll: LatLng, zoom: f64) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = ll.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (ll.lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

/// Inverse of [`project`].
pub fn unproject(x: f64, y: f64, zoom: f64) -> LatLng {
    let size = world_size(zoom);
    let lng = x / size * 360.0 - 180.0;
    let n = PI - 2.0 * PI * y / size;
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat, lng)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: f64,
}

impl Viewport {
    pub const fn new(center: LatLng, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// World-pixel position of the container's top-left corner.
    fn origin(&self, size: ScreenSize) -> (f64, f64) {
        let (cx, cy) = project(self.center, self.zoom);
        (cx - size.width / 2.0, cy - size.height / 2.0)
    }

    /// Container-relative pixel position of a coordinate.
    pub fn to_screen(&self, ll: LatLng, size: ScreenSize) -> (f64, f64) {
        let (ox, oy) = self.origin(size);
        let (x, y) = project(ll, self.zoom);
        (x - ox, y - oy)
    }

    pub fn to_lat_lng(&self, screen_x: f64, screen_y: f64, size: ScreenSize) -> LatLng {
        let (ox, oy) = self.origin(size);
        unproject(ox + screen_x, oy + screen_y, self.zoom)
    }

    /// Move the map content by a screen delta (positive dx drags content right).
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let (cx, cy) = project(self.center, self.zoom);
        self.center = unproject(cx - dx, cy - dy, self.zoom);
    }

    /// Change zoom while keeping the coordinate under `cursor` fixed on screen.
    pub fn zoom_around(&mut self, cursor: (f64, f64), new_zoom: f64, size: ScreenSize) {
        let anchor = self.to_lat_lng(cursor.0, cursor.1, size);
        let (ax, ay) = project(anchor, new_zoom);
        let cx = ax - cursor.0 + size.width / 2.0;
        let cy = ay - cursor.1 + size.height / 2.0;
        self.zoom = new_zoom;
        self.center = unproject(cx, cy, new_zoom);
    }
}

/// One raster tile placed in container coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TilePlacement {
    pub z: i32,
    pub x: i64,
    pub y: i64,
    pub left: f64,
    pub top: f64,
    pub size: f64,
}

/// Tiles of `source` covering the container at the current viewport.
///
/// Tiles are requested at the rounded display zoom (plus the source's zoom
/// offset) and scaled for the fractional remainder. Columns wrap around the
/// antimeridian; rows outside the world are skipped.
pub fn visible_tiles(viewport: &Viewport, size: ScreenSize, source: &TileSource) -> Vec<TilePlacement> {
    if size.width <= 0.0 || size.height <= 0.0 {
        return Vec::new();
    }

    let display_zoom = viewport.zoom.round().clamp(source.min_zoom, source.max_zoom);
    let z = display_zoom as i32 + source.zoom_offset;
    if z < 0 {
        return Vec::new();
    }
    let tiles_per_axis = 1i64 << z;
    let tile_px = world_size(display_zoom) / tiles_per_axis as f64
        * 2f64.powf(viewport.zoom - display_zoom);

    let (ox, oy) = viewport.origin(size);
    let first_col = (ox / tile_px).floor() as i64;
    let last_col = ((ox + size.width) / tile_px).floor() as i64;
    let first_row = ((oy / tile_px).floor() as i64).max(0);
    let last_row = ((oy + size.height) / tile_px).floor().min((tiles_per_axis - 1) as f64) as i64;

    let mut tiles = Vec::new();
    for row in first_row..=last_row {
        for col in first_col..=last_col {
            tiles.push(TilePlacement {
                z,
                x: col.rem_euclid(tiles_per_axis),
                y: row,
                left: col as f64 * tile_px - ox,
                top: row as f64 * tile_px - oy,
                size: tile_px,
            });
        }
    }
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::TileTheme;

    const OSLO: LatLng = LatLng::new(59.9139, 10.7522);
    const SIZE: ScreenSize = ScreenSize::new(800.0, 600.0);

    #[test]
    fn test_project_origin_at_zoom_zero() {
        let (x, y) = project(LatLng::new(0.0, 0.0), 0.0);
        assert!((x - 128.0).abs() < 1e-9);
        assert!((y - 128.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_unproject_round_trip() {
        let (x, y) = project(OSLO, 11.5);
        let back = unproject(x, y, 11.5);
        assert!((back.lat - OSLO.lat).abs() < 1e-9);
        assert!((back.lng - OSLO.lng).abs() < 1e-9);
    }

    #[test]
    fn test_north_is_up() {
        let vp = Viewport::new(OSLO, 12.0);
        let (_, y_south) = vp.to_screen(LatLng::new(59.90, 10.75), SIZE);
        let (_, y_north) = vp.to_screen(LatLng::new(59.95, 10.75), SIZE);
        assert!(y_north < y_south);
    }

    #[test]
    fn test_center_maps_to_container_middle() {
        let vp = Viewport::new(OSLO, 11.5);
        let (x, y) = vp.to_screen(OSLO, SIZE);
        assert!((x - 400.0).abs() < 1e-6);
        assert!((y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_size_class_threshold() {
        assert_eq!(SizeClass::from_width(767.0), SizeClass::Mobile);
        assert_eq!(SizeClass::from_width(768.0), SizeClass::Desktop);
    }

    #[test]
    fn test_default_views() {
        let desktop = SizeClass::Desktop.default_viewport();
        assert_eq!(desktop.center, LatLng::new(59.92, 10.76));
        assert!((desktop.zoom - 11.5).abs() < 1e-9);
        let mobile = SizeClass::Mobile.default_viewport();
        assert_eq!(mobile.center, LatLng::new(59.91, 10.76));
        assert!((mobile.zoom - 10.6).abs() < 1e-9);
    }

    #[test]
    fn test_pan_moves_center_opposite_to_drag() {
        let mut vp = Viewport::new(OSLO, 12.0);
        vp.pan_by(100.0, 0.0);
        assert!(vp.center.lng < OSLO.lng);
        assert!((vp.center.lat - OSLO.lat).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_around_keeps_cursor_point_fixed() {
        let mut vp = Viewport::new(OSLO, 11.0);
        let cursor = (150.0, 420.0);
        let before = vp.to_lat_lng(cursor.0, cursor.1, SIZE);
        vp.zoom_around(cursor, 12.5, SIZE);
        let (x, y) = vp.to_screen(before, SIZE);
        assert!((x - cursor.0).abs() < 1e-6);
        assert!((y - cursor.1).abs() < 1e-6);
        assert!((vp.zoom - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_visible_tiles_cover_container() {
        let vp = Viewport::new(OSLO, 11.5);
        let tiles = visible_tiles(&vp, SIZE, TileTheme::Blue.tile_source());
        assert!(!tiles.is_empty());
        let min_left = tiles.iter().map(|t| t.left).fold(f64::INFINITY, f64::min);
        let min_top = tiles.iter().map(|t| t.top).fold(f64::INFINITY, f64::min);
        let max_right = tiles.iter().map(|t| t.left + t.size).fold(f64::NEG_INFINITY, f64::max);
        let max_bottom = tiles.iter().map(|t| t.top + t.size).fold(f64::NEG_INFINITY, f64::max);
        assert!(min_left <= 0.0 && min_top <= 0.0);
        assert!(max_right >= SIZE.width && max_bottom >= SIZE.height);
    }

    #[test]
    fn test_visible_tiles_apply_zoom_offset_and_scale() {
        // Zoom 11.5 rounds to 12; 512 px tiles with offset -1 are requested at z=11
        // and drawn at 512 * 2^-0.5 px.
        let vp = Viewport::new(OSLO, 11.5);
        let tiles = visible_tiles(&vp, SIZE, TileTheme::Blue.tile_source());
        assert!(tiles.iter().all(|t| t.z == 11));
        let expected = 512.0 * 2f64.powf(-0.5);
        assert!((tiles[0].size - expected).abs() < 1e-6);
    }

    #[test]
    fn test_visible_tiles_skip_rows_outside_world() {
        let vp = Viewport::new(LatLng::new(84.0, 0.0), 3.0);
        let tiles = visible_tiles(&vp, SIZE, TileTheme::Blue.tile_source());
        assert!(tiles.iter().all(|t| t.y >= 0));
    }

    #[test]
    fn test_visible_tiles_empty_container() {
        let vp = Viewport::new(OSLO, 11.5);
        assert!(visible_tiles(&vp, ScreenSize::new(0.0, 0.0), TileTheme::Blue.tile_source()).is_empty());
    }
}
