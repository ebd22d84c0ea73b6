use dioxus::html::geometry::WheelDelta;
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use oslo_shared::map::{district_at, label_views, region_views, MapHandle, MapState, RegionView, RenderContext};
use oslo_shared::models::DistrictInfo;
use oslo_shared::theme::TileTheme;
use oslo_shared::viewport::{visible_tiles, LatLng, Viewport};

use crate::{api, config, coords};

const MAP_CONTAINER_ID: &str = "district-map-container";

/// Pointer movement in pixels below which a press counts as a click.
const DRAG_THRESHOLD: f64 = 3.0;

/// Same for a finger, which is less precise than a mouse.
const TOUCH_DRAG_THRESHOLD: f64 = 8.0;

/// Signal-backed [`MapHandle`] shared between the map and its controls.
#[derive(Clone, Copy, PartialEq)]
pub struct MapController {
    state: Signal<MapState>,
}

impl MapController {
    pub fn theme(&self) -> TileTheme {
        self.state.read().theme
    }
}

impl MapHandle for MapController {
    fn zoom_in(&mut self) {
        self.state.write().zoom_in();
    }

    fn zoom_out(&mut self) {
        self.state.write().zoom_out();
    }

    fn reset_view(&mut self) {
        self.state.write().reset_view();
    }

    fn set_theme(&mut self, theme: TileTheme) {
        tracing::debug!(theme = theme.key(), "switching tile theme");
        self.state.write().set_theme(theme);
    }
}

/// Map state for the current component, starting at the default view for
/// the window's size class.
pub fn use_map_controller() -> MapController {
    let state = use_signal(|| MapState::new(coords::window_width()));
    MapController { state }
}

// ---------------------------------------------------------------------------
// Pure helpers
// ---------------------------------------------------------------------------

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like value.
fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * 40.0,
        WheelDelta::Pages(d) => d.y * 400.0,
    }
}

/// One `<path>` per region, in draw order.
fn build_svg_content<F>(regions: &[RegionView<'_>], to_screen: F) -> String
where
    F: Fn(LatLng) -> (f64, f64),
{
    let mut svg = String::with_capacity(16 * 1024);
    for view in regions {
        let d = coords::path_data(&view.shape.rings, &to_screen);
        if d.is_empty() {
            continue;
        }
        let css = view.style.to_css();
        let class = if view.interactive() { "district" } else { "backdrop" };
        svg.push_str(&format!(
            r#"<path class="{class}" d="{d}" fill-rule="evenodd" style="{css}"/>"#
        ));
    }
    svg
}

fn tile_style(left: f64, top: f64, size: f64) -> String {
    format!("left:{left:.1}px;top:{top:.1}px;width:{size:.1}px;height:{size:.1}px;")
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

#[component]
pub fn MapView(
    controller: MapController,
    districts: Vec<DistrictInfo>,
    selected_id: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    let mut state = controller.state;
    let env = use_hook(config::env);

    let geometry = use_resource(move || async move {
        match api::fetch_geometry(&config::env()).await {
            Ok(geometry) => {
                tracing::info!(
                    regions = geometry.regions.len(),
                    labels = geometry.labels.len(),
                    "district geometry loaded"
                );
                Some(geometry)
            }
            Err(error) => {
                tracing::error!(%error, "failed to load district geometry");
                None
            }
        }
    });

    let mut hovered = use_signal(|| None::<String>);

    // Drag state
    let mut is_dragging = use_signal(|| false);
    let mut did_drag = use_signal(|| false);
    let mut drag_start = use_signal(|| (0.0_f64, 0.0_f64));
    let mut drag_start_viewport = use_signal(|| None::<Viewport>);

    // Touch state
    let mut touch_start_pos = use_signal(|| None::<(f64, f64)>);
    let mut touch_did_pan = use_signal(|| false);
    let mut touch_start_viewport = use_signal(|| None::<Viewport>);
    let mut is_pinching = use_signal(|| false);
    let mut pinch_start_distance = use_signal(|| 0.0_f64);
    let mut pinch_midpoint = use_signal(|| (0.0_f64, 0.0_f64));

    // Hit test against loaded regions. Returns the district id under a
    // container-relative point.
    let hit_districts = districts.clone();
    let district_under = move |point: (f64, f64)| -> Option<String> {
        let guard = geometry.read();
        let loaded = guard.as_ref().and_then(|g| g.as_ref())?;
        let map = state.read();
        let ll = map.viewport.to_lat_lng(point.0, point.1, map.screen);
        let ctx = RenderContext {
            theme: map.theme,
            selected_id: None,
            districts: &hit_districts,
        };
        district_at(&ctx, &loaded.regions, ll).map(|d| d.id.clone())
    };

    let district_under_click = district_under.clone();
    let district_under_tap = district_under.clone();

    let map = state.read().clone();
    let source = map.theme.tile_source();

    let tiles: Vec<(String, String, String)> = visible_tiles(&map.viewport, map.screen, source)
        .into_iter()
        .map(|t| {
            (
                format!("{}/{}/{}/{:.0}", t.z, t.x, t.y, t.left),
                source.tile_url(t.z, t.x, t.y, &env.mapbox_token),
                tile_style(t.left, t.top, t.size),
            )
        })
        .collect();

    let ctx = RenderContext {
        theme: map.theme,
        selected_id: selected_id.as_deref(),
        districts: &districts,
    };
    let hovered_id = hovered.read().clone();

    let geometry_guard = geometry.read();
    let loaded = geometry_guard.as_ref().and_then(|g| g.as_ref());

    let svg_html = loaded
        .map(|g| {
            let regions = region_views(&ctx, &g.regions, hovered_id.as_deref());
            let content = build_svg_content(&regions, |ll| map.to_screen(ll));
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" style="position:absolute;top:0;left:0;pointer-events:none;">{content}</svg>"#
            )
        })
        .unwrap_or_default();

    let labels: Vec<(String, String, String, bool)> = loaded
        .map(|g| {
            label_views(&ctx, &g.labels)
                .into_iter()
                .map(|label| {
                    let (x, y) = map.to_screen(label.position);
                    let style = format!(
                        "left:{x:.1}px;top:{y:.1}px;color:{};text-shadow:{};",
                        label.palette.color, label.palette.shadow
                    );
                    (label.district_id, label.text, style, label.selected)
                })
                .collect()
        })
        .unwrap_or_default();

    let container_class = if *is_dragging.read() && *did_drag.read() {
        "map-container dragging"
    } else if hovered_id.is_some() {
        "map-container interactive"
    } else {
        "map-container"
    };

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "{container_class}",

            onmounted: move |_| {
                if let Some(size) = coords::container_size(MAP_CONTAINER_ID) {
                    state.write().set_screen(size);
                }
            },

            onresize: move |_| {
                if let Some(size) = coords::container_size(MAP_CONTAINER_ID) {
                    let mut map = state.write();
                    map.set_screen(size);
                    map.on_resize(coords::window_width());
                }
            },

            onwheel: move |evt: Event<WheelData>| {
                evt.prevent_default();
                let delta_y = wheel_delta_y(evt.data().delta());
                let client = evt.data().client_coordinates();
                if let Some(cursor) = coords::client_to_element(client.x, client.y, MAP_CONTAINER_ID) {
                    state.write().wheel_zoom(cursor, delta_y);
                }
            },

            onmousedown: move |evt: Event<MouseData>| {
                if evt.trigger_button() != Some(MouseButton::Primary) {
                    return;
                }
                let client = evt.client_coordinates();
                is_dragging.set(true);
                did_drag.set(false);
                drag_start.set((client.x, client.y));
                drag_start_viewport.set(Some(state.read().viewport));
            },

            onmousemove: move |evt: Event<MouseData>| {
                let client = evt.client_coordinates();
                if *is_dragging.read() {
                    let (sx, sy) = *drag_start.read();
                    let dx = client.x - sx;
                    let dy = client.y - sy;
                    if !*did_drag.read() && (dx.abs() > DRAG_THRESHOLD || dy.abs() > DRAG_THRESHOLD) {
                        did_drag.set(true);
                        hovered.set(None);
                    }
                    if *did_drag.read() {
                        let start = *drag_start_viewport.read();
                        if let Some(start) = start {
                            state.write().drag_from(start, dx, dy);
                        }
                    }
                    return;
                }

                let under = coords::client_to_element(client.x, client.y, MAP_CONTAINER_ID)
                    .and_then(&district_under);
                if *hovered.read() != under {
                    hovered.set(under);
                }
            },

            onmouseup: move |_| {
                is_dragging.set(false);
            },

            onmouseleave: move |_| {
                is_dragging.set(false);
                hovered.set(None);
            },

            onclick: move |evt: Event<MouseData>| {
                if *did_drag.read() {
                    return;
                }
                let client = evt.client_coordinates();
                if let Some(id) = coords::client_to_element(client.x, client.y, MAP_CONTAINER_ID)
                    .and_then(&district_under_click)
                {
                    on_select.call(id);
                }
            },

            ontouchstart: move |evt: Event<TouchData>| {
                evt.prevent_default();
                let touches = evt.data().touches();
                if touches.len() == 1 {
                    let p = touches[0].client_coordinates();
                    touch_start_pos.set(Some((p.x, p.y)));
                    touch_did_pan.set(false);
                    touch_start_viewport.set(Some(state.read().viewport));
                } else if touches.len() >= 2 {
                    let p0 = touches[0].client_coordinates();
                    let p1 = touches[1].client_coordinates();
                    let (p0, p1) = ((p0.x, p0.y), (p1.x, p1.y));
                    is_pinching.set(true);
                    pinch_start_distance.set(coords::point_distance(p0, p1));
                    let mid = coords::midpoint(p0, p1);
                    pinch_midpoint.set(
                        coords::client_to_element(mid.0, mid.1, MAP_CONTAINER_ID).unwrap_or(mid),
                    );
                    touch_start_viewport.set(Some(state.read().viewport));
                    // A second finger ends any tap
                    touch_start_pos.set(None);
                    touch_did_pan.set(true);
                }
            },

            ontouchmove: move |evt: Event<TouchData>| {
                evt.prevent_default();
                let touches = evt.data().touches();
                let Some(start) = *touch_start_viewport.read() else {
                    return;
                };

                if *is_pinching.read() && touches.len() >= 2 {
                    let p0 = touches[0].client_coordinates();
                    let p1 = touches[1].client_coordinates();
                    let start_d = *pinch_start_distance.read();
                    if start_d < 1.0 {
                        return;
                    }
                    let scale = coords::point_distance((p0.x, p0.y), (p1.x, p1.y)) / start_d;
                    let mid = *pinch_midpoint.read();
                    state.write().pinch_zoom(start, mid, scale);
                } else if touches.len() == 1 {
                    let p = touches[0].client_coordinates();
                    let cur = (p.x, p.y);
                    let Some(origin) = *touch_start_pos.read() else {
                        return;
                    };
                    if !*touch_did_pan.read()
                        && coords::point_distance(origin, cur) > TOUCH_DRAG_THRESHOLD
                    {
                        touch_did_pan.set(true);
                    }
                    if *touch_did_pan.read() {
                        state.write().drag_from(start, cur.0 - origin.0, cur.1 - origin.1);
                    }
                }
            },

            ontouchend: move |evt: Event<TouchData>| {
                evt.prevent_default();
                let remaining = evt.data().touches().len();

                if *is_pinching.read() {
                    // Wait for every finger to lift
                    if remaining == 0 {
                        is_pinching.set(false);
                        touch_start_pos.set(None);
                        touch_start_viewport.set(None);
                    }
                    return;
                }

                if remaining == 0 && !*touch_did_pan.read() {
                    let tap = *touch_start_pos.read();
                    if let Some(id) = tap
                        .and_then(|(x, y)| coords::client_to_element(x, y, MAP_CONTAINER_ID))
                        .and_then(&district_under_tap)
                    {
                        on_select.call(id);
                    }
                }

                if remaining == 0 {
                    touch_start_pos.set(None);
                    touch_start_viewport.set(None);
                }
            },

            ontouchcancel: move |_evt: Event<TouchData>| {
                touch_start_pos.set(None);
                touch_start_viewport.set(None);
                touch_did_pan.set(false);
                is_pinching.set(false);
            },

            div { class: "map-tiles",
                for (key, url, style) in tiles {
                    img {
                        key: "{key}",
                        class: "map-tile",
                        src: "{url}",
                        style: "{style}",
                        draggable: "false",
                        alt: "",
                    }
                }
            }

            div {
                class: "map-regions",
                dangerous_inner_html: "{svg_html}",
            }

            div { class: "map-labels",
                for (id, text, style, selected) in labels {
                    div {
                        key: "{id}",
                        class: if selected { "district-label selected" } else { "district-label" },
                        style: "{style}",
                        onclick: move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            if !*did_drag.read() {
                                on_select.call(id.clone());
                            }
                        },
                        "{text}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oslo_shared::fallbacks;
    use oslo_shared::geo::RegionShape;

    fn triangle(name: &str) -> RegionShape {
        RegionShape {
            name: name.to_string(),
            rings: vec![vec![
                LatLng::new(0.0, 0.0),
                LatLng::new(0.0, 1.0),
                LatLng::new(1.0, 1.0),
            ]],
        }
    }

    #[test]
    fn test_svg_has_one_path_per_region() {
        let districts = fallbacks::districts();
        let regions = vec![triangle(&districts[1].name), triangle("Marka")];
        let ctx = RenderContext {
            theme: TileTheme::Blue,
            selected_id: Some(&districts[1].id),
            districts: &districts,
        };
        let views = region_views(&ctx, &regions, None);
        let svg = build_svg_content(&views, |ll| (ll.lng * 100.0, ll.lat * 100.0));
        assert_eq!(svg.matches("<path ").count(), 2);
        assert!(svg.contains(r#"d="M0.0,0.0L100.0,0.0L100.0,100.0Z""#));
        assert!(svg.contains("fill:#2D4B5F;"));
        assert!(svg.contains("fill:#F1F5F9;"));
        assert_eq!(svg.matches(r#"class="district""#).count(), 1);
        assert_eq!(svg.matches(r#"class="backdrop""#).count(), 1);
    }

    #[test]
    fn test_svg_skips_empty_regions() {
        let districts = fallbacks::districts();
        let regions = vec![RegionShape {
            name: districts[1].name.clone(),
            rings: vec![],
        }];
        let ctx = RenderContext {
            theme: TileTheme::Dark,
            selected_id: None,
            districts: &districts,
        };
        let views = region_views(&ctx, &regions, None);
        assert!(build_svg_content(&views, |ll| (ll.lng, ll.lat)).is_empty());
    }

    #[test]
    fn test_tile_style() {
        assert_eq!(
            tile_style(-12.34, 40.0, 362.04),
            "left:-12.3px;top:40.0px;width:362.0px;height:362.0px;"
        );
    }
}
