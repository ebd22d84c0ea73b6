use crate::models::DistrictInfo;
use crate::theme::TileTheme;

/// Ascending `(threshold, color)` steps for the price-change percentage.
pub const SCALE: [(f64, &str); 6] = [
    (0.0, "#93C5FD"),
    (2.0, "#60A5FA"),
    (3.0, "#3B82F6"),
    (4.0, "#2563EB"),
    (5.0, "#1D4ED8"),
    (6.0, "#1E40AF"),
];

/// Hover color for districts already on the top step.
pub const SCALE_MAX: &str = "#1E3A8A";

/// Fill for polygons that have no matching district record.
pub const DEFAULT_FILL: &str = "#F1F5F9";

const TRANSPARENT: &str = "transparent";
const AREA_FILL_OPACITY: f64 = 0.4;

fn scale_index(price_change: f64) -> usize {
    SCALE
        .iter()
        .rposition(|&(threshold, _)| price_change >= threshold)
        .unwrap_or(0)
}

/// Color of the highest step whose threshold is <= `price_change`, or the
/// lowest step's color when the value is below every threshold.
pub fn choropleth_color(price_change: f64) -> &'static str {
    SCALE[scale_index(price_change)].1
}

/// One step above the natural color.
pub fn hover_color(price_change: f64) -> &'static str {
    SCALE
        .get(scale_index(price_change) + 1)
        .map(|&(_, color)| color)
        .unwrap_or(SCALE_MAX)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStyle {
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub stroke_color: &'static str,
    pub stroke_weight: f64,
    pub stroke_opacity: f64,
}

impl RegionStyle {
    const INVISIBLE: RegionStyle = RegionStyle {
        fill_color: TRANSPARENT,
        fill_opacity: 0.0,
        stroke_color: TRANSPARENT,
        stroke_weight: 0.0,
        stroke_opacity: 0.0,
    };

    /// Inline CSS for an SVG path.
    pub fn to_css(&self) -> String {
        format!(
            "fill:{};fill-opacity:{};stroke:{};stroke-width:{};stroke-opacity:{};",
            self.fill_color,
            self.fill_opacity,
            self.stroke_color,
            self.stroke_weight,
            self.stroke_opacity
        )
    }
}

/// Resting style of a district polygon.
pub fn region_style(
    theme: TileTheme,
    district: Option<&DistrictInfo>,
    is_selected: bool,
) -> RegionStyle {
    let style = theme.style();
    if !style.show_overlay {
        return RegionStyle::INVISIBLE;
    }

    let (fill_color, fill_opacity) = if style.show_choropleth {
        let fill = match district {
            Some(_) if is_selected => style.selected_fill_color,
            Some(d) => choropleth_color(d.price_change),
            None => DEFAULT_FILL,
        };
        (fill, AREA_FILL_OPACITY)
    } else if district.is_some() && is_selected {
        (style.selected_fill_color, AREA_FILL_OPACITY)
    } else {
        (TRANSPARENT, 0.0)
    };

    RegionStyle {
        fill_color,
        fill_opacity,
        stroke_color: style.border_color,
        stroke_weight: style.border_weight,
        stroke_opacity: style.border_opacity,
    }
}

/// Style while the pointer is over a district, or `None` when hovering does
/// not change its look (selected district, or a theme without an overlay).
pub fn hover_style(theme: TileTheme, district: &DistrictInfo, is_selected: bool) -> Option<RegionStyle> {
    let style = theme.style();
    if is_selected || !style.show_overlay {
        return None;
    }
    let fill_color = if style.show_choropleth {
        hover_color(district.price_change)
    } else {
        choropleth_color(district.price_change)
    };
    Some(RegionStyle {
        fill_color,
        fill_opacity: style.hover_fill_opacity,
        ..region_style(theme, Some(district), false)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelPalette {
    pub color: &'static str,
    pub shadow: &'static str,
}

pub fn label_palette(theme: TileTheme, is_selected: bool) -> LabelPalette {
    let style = theme.style();
    if is_selected {
        LabelPalette {
            color: style.label_selected_color,
            shadow: style.label_selected_shadow,
        }
    } else {
        LabelPalette {
            color: style.label_color,
            shadow: style.label_shadow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallbacks;
    use crate::theme::SELECTED_COLOR;

    fn with_change(price_change: f64) -> DistrictInfo {
        DistrictInfo {
            price_change,
            ..fallbacks::districts()[1].clone()
        }
    }

    #[test]
    fn test_color_at_exact_thresholds() {
        for &(threshold, color) in &SCALE {
            assert_eq!(choropleth_color(threshold), color);
        }
    }

    #[test]
    fn test_color_between_thresholds_uses_lower_step() {
        assert_eq!(choropleth_color(2.6), "#60A5FA");
        assert_eq!(choropleth_color(3.99), "#3B82F6");
    }

    #[test]
    fn test_color_below_scale_uses_lowest_step() {
        assert_eq!(choropleth_color(-4.0), "#93C5FD");
    }

    #[test]
    fn test_color_above_scale_uses_highest_step() {
        assert_eq!(choropleth_color(42.0), "#1E40AF");
    }

    #[test]
    fn test_color_lookup_matches_highest_threshold_rule() {
        let mut v = -2.0;
        while v < 8.0 {
            let expected = SCALE
                .iter()
                .rev()
                .find(|(t, _)| *t <= v)
                .map(|(_, c)| *c)
                .unwrap_or(SCALE[0].1);
            assert_eq!(choropleth_color(v), expected, "value {v}");
            v += 0.25;
        }
    }

    #[test]
    fn test_hover_color_steps_up() {
        assert_eq!(hover_color(1.0), "#60A5FA");
        assert_eq!(hover_color(5.5), "#1E40AF");
    }

    #[test]
    fn test_hover_color_on_top_step_is_max() {
        assert_eq!(hover_color(6.0), SCALE_MAX);
    }

    #[test]
    fn test_blue_selected_uses_selected_fill() {
        let d = with_change(2.6);
        let s = region_style(TileTheme::Blue, Some(&d), true);
        assert_eq!(s.fill_color, SELECTED_COLOR);
        assert!((s.fill_opacity - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_blue_unmatched_region_uses_default_fill() {
        let s = region_style(TileTheme::Blue, None, false);
        assert_eq!(s.fill_color, DEFAULT_FILL);
    }

    #[test]
    fn test_dark_unselected_is_border_only() {
        let d = with_change(2.6);
        let s = region_style(TileTheme::Dark, Some(&d), false);
        assert_eq!(s.fill_color, "transparent");
        assert_eq!(s.fill_opacity, 0.0);
        assert_eq!(s.stroke_color, "rgba(255,255,255,0.25)");
    }

    #[test]
    fn test_snapmap_regions_are_invisible() {
        let d = with_change(2.6);
        let s = region_style(TileTheme::Snapmap, Some(&d), true);
        assert_eq!(s.fill_opacity, 0.0);
        assert_eq!(s.stroke_weight, 0.0);
    }

    #[test]
    fn test_hover_blue_keeps_border_and_raises_opacity() {
        let d = with_change(2.6);
        let h = hover_style(TileTheme::Blue, &d, false).unwrap();
        assert_eq!(h.fill_color, "#3B82F6");
        assert!((h.fill_opacity - 0.55).abs() < 1e-9);
        assert_eq!(h.stroke_color, "#FFFFFF");
    }

    #[test]
    fn test_hover_dark_uses_natural_color() {
        let d = with_change(2.6);
        let h = hover_style(TileTheme::Dark, &d, false).unwrap();
        assert_eq!(h.fill_color, "#60A5FA");
        assert!((h.fill_opacity - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_no_hover_change_for_selected_or_snapmap() {
        let d = with_change(2.6);
        assert!(hover_style(TileTheme::Blue, &d, true).is_none());
        assert!(hover_style(TileTheme::Snapmap, &d, false).is_none());
    }

    #[test]
    fn test_label_palette_switches_on_selection() {
        assert_eq!(label_palette(TileTheme::Blue, false).color, "#1E3A50");
        assert_eq!(label_palette(TileTheme::Blue, true).color, "#FFFFFF");
    }

    #[test]
    fn test_region_css() {
        let css = region_style(TileTheme::Blue, None, false).to_css();
        assert!(css.starts_with("fill:#F1F5F9;fill-opacity:0.4;"));
        assert!(css.contains("stroke-width:1.5;"));
    }
}
