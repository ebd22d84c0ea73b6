use oslo_shared::viewport::{LatLng, ScreenSize};
use wasm_bindgen::JsCast;

/// Bounding rect of an element, looked up by id.
pub fn container_rect(container_id: &str) -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(container_id)?;
    Some(element.get_bounding_client_rect())
}

pub fn container_size(container_id: &str) -> Option<ScreenSize> {
    container_rect(container_id).map(|r| ScreenSize::new(r.width(), r.height()))
}

pub fn window_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0)
}

/// Overwrite the live value of an `<input>`. The `value` attribute alone does
/// not reach the DOM when the rendered text is unchanged.
pub fn set_input_value(input_id: &str, value: &str) {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(input_id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlInputElement>().ok());
    if let Some(input) = input {
        input.set_value(value);
    }
}

/// Convert client (viewport) coordinates to container-relative pixel coordinates.
pub fn client_to_container(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
) -> (f64, f64) {
    (client_x - rect_left, client_y - rect_top)
}

/// Container-relative position of a client point, using the live element rect.
pub fn client_to_element(client_x: f64, client_y: f64, container_id: &str) -> Option<(f64, f64)> {
    let rect = container_rect(container_id)?;
    Some(client_to_container(client_x, client_y, rect.left(), rect.top()))
}

/// Distance between two client-coordinate points.
pub fn point_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

pub fn midpoint(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

/// SVG path data for a set of rings. Each ring becomes one closed subpath;
/// fill with `fill-rule="evenodd"` to keep holes open.
pub fn path_data<F>(rings: &[Vec<LatLng>], to_screen: F) -> String
where
    F: Fn(LatLng) -> (f64, f64),
{
    let mut d = String::new();
    for ring in rings.iter().filter(|r| r.len() >= 3) {
        for (i, &ll) in ring.iter().enumerate() {
            let (x, y) = to_screen(ll);
            let cmd = if i == 0 { 'M' } else { 'L' };
            d.push_str(&format!("{cmd}{x:.1},{y:.1}"));
        }
        d.push('Z');
    }
    d
}
