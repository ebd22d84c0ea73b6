use serde::{Deserialize, Serialize};

/// Name of the synthetic city-wide record. It has no region of its own and
/// never gets a map label.
pub const CITY_TOTAL_NAME: &str = "Oslo (Totalt)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictInfo {
    pub id: String,
    pub name: String,
    /// Year-over-year price change in percent.
    pub price_change: f64,
    pub avg_days_on_market: f64,
    pub price_per_sqm: f64,
    pub median_price: f64,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
}

impl DistrictInfo {
    pub fn is_city_total(&self) -> bool {
        self.name == CITY_TOTAL_NAME
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub published_at: String,
    #[serde(default)]
    pub featured: bool,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityAverages {
    pub price_trend: f64,
    pub days_on_market: f64,
    /// Median price in millions of NOK.
    pub median_price: f64,
    pub avg_sqm_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub name: String,
    pub href: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub has_dropdown: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
    pub cta_text: String,
    pub cta_url: Option<String>,
    pub newsletter_title: Option<String>,
    pub newsletter_subtitle: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_deserializes_camel_case() {
        let json = r#"{"id":"frogner","name":"Frogner","priceChange":3.2,"avgDaysOnMarket":22,"pricePerSqm":145000,"medianPrice":8900000,"description":"Vest.","lat":59.9171,"lng":10.7061}"#;
        let d: DistrictInfo = serde_json::from_str(json).unwrap();
        assert_eq!(d.id, "frogner");
        assert!((d.price_change - 3.2).abs() < 1e-9);
        assert!((d.avg_days_on_market - 22.0).abs() < 1e-9);
        assert!(!d.is_city_total());
    }

    #[test]
    fn test_blog_post_reads_underscore_id_and_missing_image() {
        let json = r#"{"_id":"abc","title":"T","slug":"t","category":"MARKEDSINNSIKT","publishedAt":"2026-01-12T00:00:00Z","featured":true}"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "abc");
        assert!(post.featured);
        assert!(post.image_url.is_none());
    }

    #[test]
    fn test_nav_link_flags_default_to_false() {
        let json = r#"{"navLinks":[{"name":"Kart","href":"/kart"}],"ctaText":"Ring meg"}"#;
        let cfg: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.nav_links.len(), 1);
        assert!(!cfg.nav_links[0].active);
        assert!(!cfg.nav_links[0].has_dropdown);
        assert!(cfg.cta_url.is_none());
    }
}
