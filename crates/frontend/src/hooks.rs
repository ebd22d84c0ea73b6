use dioxus::prelude::*;
use oslo_shared::content::{fetch_replacement, queries, HasContent};
use oslo_shared::fallbacks;
use oslo_shared::models::{BlogPost, CityAverages, DistrictInfo, SiteConfig};
use serde::de::DeserializeOwned;

use crate::api::SanityClient;
use crate::config;

/// Holds `fallback()` from the first render and swaps in the first non-empty
/// result of `query`. The request runs once per mount and is dropped with
/// the component.
pub fn use_content_query<T>(query: &'static str, fallback: fn() -> T) -> Signal<T>
where
    T: DeserializeOwned + HasContent + 'static,
{
    let mut value = use_signal(fallback);

    use_future(move || async move {
        let client = SanityClient::from_config(&config::env());
        if let Some(replacement) = fetch_replacement(client.as_ref(), query).await {
            tracing::debug!(query = %query.lines().next().unwrap_or_default(), "content replaced");
            value.set(replacement);
        }
    });

    value
}

pub fn use_districts() -> Signal<Vec<DistrictInfo>> {
    use_content_query(queries::DISTRICTS, fallbacks::districts)
}

pub fn use_blog_posts() -> Signal<Vec<BlogPost>> {
    use_content_query(queries::BLOG_POSTS, fallbacks::blog_posts)
}

pub fn use_city_averages() -> Signal<CityAverages> {
    use_content_query(queries::CITY_AVERAGES, fallbacks::city_averages)
}

pub fn use_site_config() -> Signal<SiteConfig> {
    use_content_query(queries::SITE_CONFIG, fallbacks::site_config)
}
