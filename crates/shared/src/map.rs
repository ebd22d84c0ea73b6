//! Map state and per-render view models.
//!
//! [`MapState`] owns theme and viewport; [`region_views`] and [`label_views`]
//! turn the loaded geometry plus a [`RenderContext`] into everything the UI
//! needs to draw. Nothing here holds on to the selection, so a selection
//! change only needs a re-render.

use crate::choropleth::{hover_style, label_palette, region_style, LabelPalette, RegionStyle};
use crate::geo::{LabelPoint, RegionShape};
use crate::models::DistrictInfo;
use crate::theme::TileTheme;
use crate::viewport::{LatLng, ScreenSize, SizeClass, Viewport};

/// Zoom change of one zoom button press or one wheel notch.
pub const ZOOM_STEP: f64 = 1.0;

/// Imperative actions the shell may invoke on the map.
pub trait MapHandle {
    fn zoom_in(&mut self);
    fn zoom_out(&mut self);
    fn reset_view(&mut self);
    fn set_theme(&mut self, theme: TileTheme);
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapState {
    pub theme: TileTheme,
    pub viewport: Viewport,
    pub size_class: SizeClass,
    pub screen: ScreenSize,
}

impl MapState {
    /// State at mount for a window of `window_width` CSS pixels.
    pub fn new(window_width: f64) -> Self {
        let size_class = SizeClass::from_width(window_width);
        Self {
            theme: TileTheme::default(),
            viewport: size_class.default_viewport(),
            size_class,
            screen: ScreenSize::new(0.0, 0.0),
        }
    }

    fn clamp_zoom(&self, zoom: f64) -> f64 {
        let source = self.theme.tile_source();
        zoom.clamp(source.min_zoom, source.max_zoom)
    }

    /// Re-applies the default view only when the size class changes.
    pub fn on_resize(&mut self, window_width: f64) {
        let size_class = SizeClass::from_width(window_width);
        if size_class != self.size_class {
            tracing::debug!(?size_class, "size class changed, resetting view");
            self.size_class = size_class;
            self.viewport = size_class.default_viewport();
        }
    }

    pub fn set_screen(&mut self, screen: ScreenSize) {
        self.screen = screen;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_by(dx, dy);
    }

    /// Wheel zoom around a container-relative cursor position. Negative
    /// `delta_y` (wheel up) zooms in.
    /// Pan relative to the viewport at the start of a drag gesture.
    pub fn drag_from(&mut self, start: Viewport, dx: f64, dy: f64) {
        self.viewport = start;
        self.viewport.pan_by(dx, dy);
    }

    /// Two-finger zoom relative to the viewport at the start of the gesture.
    /// `scale` is the current finger distance over the starting distance; the
    /// point under `midpoint` stays put.
    pub fn pinch_zoom(&mut self, start: Viewport, midpoint: (f64, f64), scale: f64) {
        if !(scale.is_finite() && scale > 0.0) {
            return;
        }
        self.viewport = start;
        let zoom = self.clamp_zoom(start.zoom + scale.log2());
        self.viewport.zoom_around(midpoint, zoom, self.screen);
    }

    pub fn wheel_zoom(&mut self, cursor: (f64, f64), delta_y: f64) {
        if delta_y == 0.0 {
            return;
        }
        let step = if delta_y < 0.0 { ZOOM_STEP } else { -ZOOM_STEP };
        let zoom = self.clamp_zoom(self.viewport.zoom + step);
        if zoom != self.viewport.zoom {
            self.viewport.zoom_around(cursor, zoom, self.screen);
        }
    }

    pub fn to_screen(&self, ll: LatLng) -> (f64, f64) {
        self.viewport.to_screen(ll, self.screen)
    }
}

impl MapHandle for MapState {
    fn zoom_in(&mut self) {
        self.viewport.zoom = self.clamp_zoom(self.viewport.zoom + ZOOM_STEP);
    }

    fn zoom_out(&mut self) {
        self.viewport.zoom = self.clamp_zoom(self.viewport.zoom - ZOOM_STEP);
    }

    fn reset_view(&mut self) {
        self.viewport = self.size_class.default_viewport();
    }

    fn set_theme(&mut self, theme: TileTheme) {
        self.theme = theme;
        self.viewport.zoom = self.clamp_zoom(self.viewport.zoom);
    }
}

/// Inputs of one render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: TileTheme,
    pub selected_id: Option<&'a str>,
    pub districts: &'a [DistrictInfo],
}

impl<'a> RenderContext<'a> {
    /// District joined to a geometry feature by exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&'a DistrictInfo> {
        self.districts.iter().find(|d| d.name == name)
    }

    fn is_selected(&self, district: &DistrictInfo) -> bool {
        self.selected_id == Some(district.id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionView<'a> {
    pub shape: &'a RegionShape,
    pub district_id: Option<String>,
    pub style: RegionStyle,
    pub hovered: bool,
}

impl RegionView<'_> {
    /// Regions without a district record take no pointer events.
    pub fn interactive(&self) -> bool {
        self.district_id.is_some()
    }
}

/// Styled regions in draw order. The hovered region, if it has a hover
/// style, uses it and is moved last so it draws on top.
pub fn region_views<'a>(
    ctx: &RenderContext<'_>,
    regions: &'a [RegionShape],
    hovered_id: Option<&str>,
) -> Vec<RegionView<'a>> {
    let mut views: Vec<RegionView<'a>> = regions
        .iter()
        .map(|shape| {
            let district = ctx.find_by_name(&shape.name);
            let selected = district.is_some_and(|d| ctx.is_selected(d));
            let hover = district
                .filter(|d| hovered_id == Some(d.id.as_str()))
                .and_then(|d| hover_style(ctx.theme, d, selected));
            RegionView {
                shape,
                district_id: district.map(|d| d.id.clone()),
                style: hover.unwrap_or_else(|| region_style(ctx.theme, district, selected)),
                hovered: hover.is_some(),
            }
        })
        .collect();
    views.sort_by_key(|v| v.hovered);
    views
}

/// District whose region contains `point`. Regions without a district
/// record never match.
pub fn district_at<'a>(
    ctx: &RenderContext<'a>,
    regions: &[RegionShape],
    point: LatLng,
) -> Option<&'a DistrictInfo> {
    regions
        .iter()
        .filter(|shape| shape.contains(point))
        .find_map(|shape| ctx.find_by_name(&shape.name))
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelView {
    pub district_id: String,
    pub text: String,
    pub position: LatLng,
    pub palette: LabelPalette,
    pub selected: bool,
}

/// Text markers for districts with a label point. The city-total record has
/// no place on the map and is skipped.
pub fn label_views(ctx: &RenderContext<'_>, labels: &[LabelPoint]) -> Vec<LabelView> {
    if !ctx.theme.style().show_labels {
        return Vec::new();
    }
    labels
        .iter()
        .filter_map(|label| {
            let district = ctx.find_by_name(&label.name)?;
            if district.is_city_total() {
                return None;
            }
            let selected = ctx.is_selected(district);
            Some(LabelView {
                district_id: district.id.clone(),
                text: district.name.clone(),
                position: label.position,
                palette: label_palette(ctx.theme, selected),
                selected,
            })
        })
        .collect()
}
