//! Tile themes: one raster tile source plus region/label styling rules each.
//!
//! The theme set is closed, so styling lives in a plain lookup table keyed by
//! [`TileTheme`].

use serde::{Deserialize, Serialize};

/// Fill used for a selected district on the choropleth theme.
pub const SELECTED_COLOR: &str = "#2D4B5F";

const MAPBOX_STYLES_URL: &str = "https://api.mapbox.com/styles/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileTheme {
    #[default]
    Blue,
    Snapmap,
    Dark,
}

impl TileTheme {
    pub const ALL: [TileTheme; 3] = [TileTheme::Blue, TileTheme::Snapmap, TileTheme::Dark];

    pub fn key(self) -> &'static str {
        match self {
            TileTheme::Blue => "blue",
            TileTheme::Snapmap => "snapmap",
            TileTheme::Dark => "dark",
        }
    }

    pub fn tile_source(self) -> &'static TileSource {
        match self {
            TileTheme::Blue => &BLUE_TILES,
            TileTheme::Snapmap => &SNAPMAP_TILES,
            TileTheme::Dark => &DARK_TILES,
        }
    }

    pub fn style(self) -> &'static LayerStyle {
        match self {
            TileTheme::Blue => &BLUE_STYLE,
            TileTheme::Snapmap => &SNAPMAP_STYLE,
            TileTheme::Dark => &DARK_STYLE,
        }
    }
}

impl std::fmt::Display for TileTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tile_source().name)
    }
}

/// A raster tile service. `style_path` is appended to the Mapbox styles API.
#[derive(Debug, PartialEq)]
pub struct TileSource {
    pub name: &'static str,
    pub style_path: &'static str,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub tile_size: f64,
    /// Added to the display zoom to get the requested tile zoom.
    pub zoom_offset: i32,
}

impl TileSource {
    pub fn tile_url(&self, z: i32, x: i64, y: i64, access_token: &str) -> String {
        format!(
            "{MAPBOX_STYLES_URL}/{}/tiles/{z}/{x}/{y}@2x?access_token={access_token}",
            self.style_path
        )
    }
}

const BLUE_TILES: TileSource = TileSource {
    name: "Blue",
    style_path: "drskjelde/cmlo7u0tk002r01qn5z3i9jps",
    min_zoom: 3.0,
    max_zoom: 19.0,
    tile_size: 512.0,
    zoom_offset: -1,
};

const SNAPMAP_TILES: TileSource = TileSource {
    name: "Snapmap",
    style_path: "drskjelde/cmkm3e0hv00it01sd4ddd4syy",
    min_zoom: 3.0,
    max_zoom: 19.0,
    tile_size: 512.0,
    zoom_offset: -1,
};

const DARK_TILES: TileSource = TileSource {
    name: "Dark",
    style_path: "mapbox/dark-v11",
    min_zoom: 3.0,
    max_zoom: 19.0,
    tile_size: 512.0,
    zoom_offset: -1,
};

#[derive(Debug, PartialEq)]
pub struct LayerStyle {
    /// Draw the district polygons at all. When false the tile style carries
    /// the borders and the polygons are an invisible click layer.
    pub show_overlay: bool,
    pub show_labels: bool,
    /// Fill polygons with the price-change scale.
    pub show_choropleth: bool,
    pub border_color: &'static str,
    pub border_weight: f64,
    pub border_opacity: f64,
    pub selected_fill_color: &'static str,
    pub hover_fill_opacity: f64,
    pub label_color: &'static str,
    pub label_selected_color: &'static str,
    pub label_shadow: &'static str,
    pub label_selected_shadow: &'static str,
}

const LIGHT_LABEL_SHADOW: &str = "0 0 4px rgba(255,255,255,0.9), 0 0 2px rgba(255,255,255,0.9)";

const BLUE_STYLE: LayerStyle = LayerStyle {
    show_overlay: true,
    show_labels: true,
    show_choropleth: true,
    border_color: "#FFFFFF",
    border_weight: 1.5,
    border_opacity: 0.8,
    selected_fill_color: SELECTED_COLOR,
    hover_fill_opacity: 0.55,
    label_color: "#1E3A50",
    label_selected_color: "#FFFFFF",
    label_shadow: LIGHT_LABEL_SHADOW,
    label_selected_shadow: "0 1px 3px rgba(0,0,0,0.4)",
};

const SNAPMAP_STYLE: LayerStyle = LayerStyle {
    show_overlay: false,
    show_labels: true,
    show_choropleth: false,
    border_color: "transparent",
    border_weight: 0.0,
    border_opacity: 0.0,
    selected_fill_color: "transparent",
    hover_fill_opacity: 0.0,
    label_color: "#1E3A50",
    label_selected_color: "#FFFFFF",
    label_shadow: LIGHT_LABEL_SHADOW,
    label_selected_shadow: "0 1px 3px rgba(0,0,0,0.4)",
};

const DARK_STYLE: LayerStyle = LayerStyle {
    show_overlay: true,
    show_labels: true,
    show_choropleth: false,
    border_color: "rgba(255,255,255,0.25)",
    border_weight: 1.0,
    border_opacity: 1.0,
    selected_fill_color: "rgba(59,130,246,0.35)",
    hover_fill_opacity: 0.25,
    label_color: "rgba(255,255,255,0.8)",
    label_selected_color: "#FFFFFF",
    label_shadow: "0 1px 3px rgba(0,0,0,0.8)",
    label_selected_shadow: "0 1px 4px rgba(0,0,0,0.9)",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_keys_are_distinct() {
        let keys: std::collections::HashSet<&str> = TileTheme::ALL.iter().map(|t| t.key()).collect();
        assert_eq!(keys.len(), TileTheme::ALL.len());
    }

    #[test]
    fn test_default_theme_is_blue() {
        assert_eq!(TileTheme::default(), TileTheme::Blue);
    }

    #[test]
    fn test_tile_url_includes_coordinates_and_token() {
        let url = TileTheme::Dark.tile_source().tile_url(10, 545, 297, "pk.test");
        assert_eq!(
            url,
            "https://api.mapbox.com/styles/v1/mapbox/dark-v11/tiles/10/545/297@2x?access_token=pk.test"
        );
    }

    #[test]
    fn test_only_blue_shows_choropleth() {
        assert!(TileTheme::Blue.style().show_choropleth);
        assert!(!TileTheme::Snapmap.style().show_choropleth);
        assert!(!TileTheme::Dark.style().show_choropleth);
    }

    #[test]
    fn test_snapmap_hides_overlay_but_keeps_labels() {
        let s = TileTheme::Snapmap.style();
        assert!(!s.show_overlay);
        assert!(s.show_labels);
    }

    #[test]
    fn test_theme_display_uses_source_name() {
        assert_eq!(TileTheme::Snapmap.to_string(), "Snapmap");
    }
}
