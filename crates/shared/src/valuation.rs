use serde::{Deserialize, Serialize};

/// Largest area the calculator accepts, in m².
pub const MAX_AREA_SQM: u32 = 10_000;

pub const DEFAULT_AREA_SQM: u32 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DwellingType {
    #[default]
    Leilighet,
    Rekkehus,
    Tomannsbolig,
    Enebolig,
}

impl DwellingType {
    pub const ALL: [DwellingType; 4] = [
        DwellingType::Leilighet,
        DwellingType::Rekkehus,
        DwellingType::Tomannsbolig,
        DwellingType::Enebolig,
    ];

    /// Multiplier on the district's price per m².
    pub fn factor(self) -> f64 {
        match self {
            DwellingType::Leilighet => 1.0,
            DwellingType::Rekkehus => 0.95,
            DwellingType::Tomannsbolig => 0.92,
            DwellingType::Enebolig => 0.90,
        }
    }

    /// Three-letter button label.
    pub fn short_label(self) -> &'static str {
        match self {
            DwellingType::Leilighet => "LEI",
            DwellingType::Rekkehus => "REK",
            DwellingType::Tomannsbolig => "TOM",
            DwellingType::Enebolig => "ENE",
        }
    }
}

impl std::fmt::Display for DwellingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DwellingType::Leilighet => write!(f, "Leilighet"),
            DwellingType::Rekkehus => write!(f, "Rekkehus"),
            DwellingType::Tomannsbolig => write!(f, "Tomannsbolig"),
            DwellingType::Enebolig => write!(f, "Enebolig"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Condition {
    Renoveringsbehov,
    #[default]
    Standard,
    Oppusset,
}

impl Condition {
    pub const ALL: [Condition; 3] = [
        Condition::Renoveringsbehov,
        Condition::Standard,
        Condition::Oppusset,
    ];

    /// Relative adjustment applied as `1 + factor`.
    pub fn factor(self) -> f64 {
        match self {
            Condition::Renoveringsbehov => -0.15,
            Condition::Standard => 0.0,
            Condition::Oppusset => 0.10,
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Condition::Renoveringsbehov => "Behov",
            Condition::Standard => "Standard",
            Condition::Oppusset => "Oppusset",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Renoveringsbehov => write!(f, "Renoveringsbehov"),
            Condition::Standard => write!(f, "Standard"),
            Condition::Oppusset => write!(f, "Oppusset"),
        }
    }
}

/// Estimated market value in whole NOK:
/// `area × price_per_sqm × type factor × (1 + condition factor)`.
pub fn estimate_value(
    price_per_sqm: f64,
    dwelling: DwellingType,
    area_sqm: u32,
    condition: Condition,
) -> u64 {
    let value = f64::from(area_sqm) * price_per_sqm * dwelling.factor() * (1.0 + condition.factor());
    value.round().max(0.0) as u64
}

/// Effective price per m² of an estimate. `None` for zero area.
pub fn price_per_sqm(value: u64, area_sqm: u32) -> Option<u64> {
    if area_sqm == 0 {
        return None;
    }
    Some((value as f64 / f64::from(area_sqm)).round() as u64)
}

/// Parse the free-text area field.
///
/// Empty input means 0. Finite non-negative numbers are rounded to whole m²
/// and capped at [`MAX_AREA_SQM`]. Anything else is rejected so the caller
/// keeps its previous value.
pub fn parse_area(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    let value: f64 = trimmed.replace(',', ".").parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value.round().min(f64::from(MAX_AREA_SQM)) as u32)
}

/// New area and field text after the user edits the area field.
///
/// Accepted input keeps the typed text. Rejected input restores the text of
/// `previous`, so the caller must write it back to the field.
pub fn apply_area_input(previous: u32, raw: &str) -> (u32, String) {
    match parse_area(raw) {
        Some(area) => (area, raw.to_string()),
        None => (previous, previous.to_string()),
    }
}

pub fn step_area(area_sqm: u32, up: bool) -> u32 {
    if up {
        area_sqm.saturating_add(1).min(MAX_AREA_SQM)
    } else {
        area_sqm.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_apartment() {
        let v = estimate_value(94_500.0, DwellingType::Leilighet, 85, Condition::Standard);
        assert_eq!(v, 8_032_500);
    }

    #[test]
    fn test_zero_area_is_zero_for_every_combination() {
        for dwelling in DwellingType::ALL {
            for condition in Condition::ALL {
                assert_eq!(estimate_value(145_000.0, dwelling, 0, condition), 0);
            }
        }
    }

    #[test]
    fn test_factors_apply_multiplicatively() {
        // 100 × 100 000 × 0.9 × 1.1
        let v = estimate_value(100_000.0, DwellingType::Enebolig, 100, Condition::Oppusset);
        assert_eq!(v, 9_900_000);
    }

    #[test]
    fn test_renovation_need_lowers_value() {
        let base = estimate_value(80_000.0, DwellingType::Rekkehus, 120, Condition::Standard);
        let worn = estimate_value(80_000.0, DwellingType::Rekkehus, 120, Condition::Renoveringsbehov);
        assert!(worn < base);
    }

    #[test]
    fn test_result_is_rounded() {
        // 1 × 1 × 0.95 × 0.85 = 0.8075 -> 1
        assert_eq!(estimate_value(1.0, DwellingType::Rekkehus, 1, Condition::Renoveringsbehov), 1);
    }

    #[test]
    fn test_price_per_sqm() {
        assert_eq!(price_per_sqm(8_032_500, 85), Some(94_500));
        assert_eq!(price_per_sqm(0, 0), None);
    }

    #[test]
    fn test_parse_area_accepts_numbers() {
        assert_eq!(parse_area("85"), Some(85));
        assert_eq!(parse_area(" 72 "), Some(72));
        assert_eq!(parse_area("85.6"), Some(86));
        assert_eq!(parse_area("85,4"), Some(85));
    }

    #[test]
    fn test_parse_area_empty_is_zero() {
        assert_eq!(parse_area(""), Some(0));
    }

    #[test]
    fn test_parse_area_rejects_garbage_and_negatives() {
        assert_eq!(parse_area("abc"), None);
        assert_eq!(parse_area("-5"), None);
        assert_eq!(parse_area("NaN"), None);
        assert_eq!(parse_area("inf"), None);
    }

    #[test]
    fn test_parse_area_caps_large_values() {
        assert_eq!(parse_area("250000"), Some(MAX_AREA_SQM));
    }

    #[test]
    fn test_apply_area_input_keeps_accepted_text() {
        assert_eq!(apply_area_input(85, "72,5"), (73, "72,5".to_string()));
        assert_eq!(apply_area_input(85, ""), (0, String::new()));
    }

    #[test]
    fn test_apply_area_input_restores_previous_on_rejection() {
        let (area, text) = apply_area_input(85, "85x");
        assert_eq!(area, 85);
        assert_eq!(text, "85");
        assert_ne!(text, "85x");
        assert_eq!(apply_area_input(40, "-3"), (40, "40".to_string()));
    }

    #[test]
    fn test_step_area_never_below_zero() {
        assert_eq!(step_area(0, false), 0);
        assert_eq!(step_area(85, true), 86);
        assert_eq!(step_area(MAX_AREA_SQM, true), MAX_AREA_SQM);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(DwellingType::default(), DwellingType::Leilighet);
        assert_eq!(Condition::default(), Condition::Standard);
    }
}
