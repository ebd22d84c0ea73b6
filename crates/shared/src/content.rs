//! Remote content with built-in fallbacks.
//!
//! A view starts out with its fallback value and makes one best-effort read
//! from the content source. The fallback is only replaced by a non-empty
//! result; errors are logged and swallowed.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::models::{BlogPost, CityAverages, DistrictInfo, SiteConfig};

pub const API_VERSION: &str = "2024-01-01";

pub mod queries {
    pub const DISTRICTS: &str = r#"*[_type == "district"] | order(name asc) {
  "id": districtId,
  name,
  priceChange,
  avgDaysOnMarket,
  pricePerSqm,
  medianPrice,
  description,
  lat,
  lng
}"#;

    pub const BLOG_POSTS: &str = r#"*[_type == "blogPost"] | order(publishedAt desc) [0...10] {
  _id,
  title,
  "slug": slug.current,
  category,
  publishedAt,
  featured,
  "imageUrl": image.asset->url
}"#;

    pub const CITY_AVERAGES: &str = r#"*[_type == "cityAverages" && _id == "cityAverages"][0] {
  priceTrend,
  daysOnMarket,
  medianPrice,
  avgSqmPrice
}"#;

    pub const SITE_CONFIG: &str = r#"*[_type == "siteConfig" && _id == "siteConfig"][0] {
  navLinks[] {
    name,
    href,
    active,
    hasDropdown
  },
  ctaText,
  ctaUrl,
  newsletterTitle,
  newsletterSubtitle
}"#;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// CDN query endpoint for a project/dataset. The GROQ text goes in the
/// `query` URL parameter.
pub fn query_endpoint(project_id: &str, dataset: &str) -> String {
    format!("https://{project_id}.apicdn.sanity.io/v{API_VERSION}/data/query/{dataset}")
}

/// Response envelope of the query API. `result` is `null` when a singleton
/// query matches nothing.
#[derive(Debug, Deserialize)]
pub struct QueryResponse<T> {
    pub result: Option<T>,
}

#[allow(async_fn_in_trait)]
pub trait ContentSource {
    async fn fetch<T: DeserializeOwned>(&self, query: &str) -> Result<Option<T>, FetchError>;
}

/// Whether a fetched value is worth replacing the fallback with.
pub trait HasContent {
    fn has_content(&self) -> bool {
        true
    }
}

impl<T> HasContent for Vec<T> {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

impl HasContent for DistrictInfo {}
impl HasContent for BlogPost {}
impl HasContent for CityAverages {}
impl HasContent for SiteConfig {}

/// Keep only results that should replace a fallback.
pub fn usable<T: HasContent>(result: Result<Option<T>, FetchError>, query: &str) -> Option<T> {
    match result {
        Ok(Some(value)) if value.has_content() => Some(value),
        Ok(_) => {
            tracing::debug!(query = %first_line(query), "empty content result, keeping fallback");
            None
        }
        Err(error) => {
            tracing::debug!(query = %first_line(query), %error, "content fetch failed, keeping fallback");
            None
        }
    }
}

fn first_line(query: &str) -> &str {
    query.lines().next().unwrap_or_default()
}

/// One read from `source`; `Some` only for a non-empty result.
pub async fn fetch_replacement<S, T>(source: Option<&S>, query: &str) -> Option<T>
where
    S: ContentSource,
    T: DeserializeOwned + HasContent,
{
    let source = source?;
    usable(source.fetch(query).await, query)
}

pub async fn fetch_or_fallback<S, T>(source: Option<&S>, query: &str, fallback: T) -> T
where
    S: ContentSource,
    T: DeserializeOwned + HasContent,
{
    fetch_replacement(source, query).await.unwrap_or(fallback)
}
