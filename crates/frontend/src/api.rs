use oslo_shared::config::EnvConfig;
use oslo_shared::content::{query_endpoint, ContentSource, FetchError, QueryResponse};
use oslo_shared::geo::{DistrictGeometry, FeatureCollection, BOUNDARIES_FILE, LABEL_POINTS_FILE};
use serde::de::DeserializeOwned;

/// Read-only client for the Sanity CDN query API.
#[derive(Debug, Clone, PartialEq)]
pub struct SanityClient {
    endpoint: String,
}

impl SanityClient {
    pub fn new(project_id: &str, dataset: &str) -> Self {
        Self {
            endpoint: query_endpoint(project_id, dataset),
        }
    }

    /// `None` when no project is configured.
    pub fn from_config(config: &EnvConfig) -> Option<Self> {
        let project_id = config.sanity_project_id.as_deref()?;
        Some(Self::new(project_id, &config.sanity_dataset))
    }

    /// Endpoint with the GROQ text URL-encoded into `query`.
    pub fn query_url(&self, query: &str) -> Result<reqwest::Url, FetchError> {
        reqwest::Url::parse_with_params(&self.endpoint, &[("query", query)])
            .map_err(|e| FetchError::Request(e.to_string()))
    }
}

impl ContentSource for SanityClient {
    async fn fetch<T: DeserializeOwned>(&self, query: &str) -> Result<Option<T>, FetchError> {
        let body = get_text(self.query_url(query)?).await?;
        decode_envelope(&body)
    }
}

/// Unwrap the `{ "result": ... }` envelope of a query response.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<Option<T>, FetchError> {
    let envelope: QueryResponse<T> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(envelope.result)
}

async fn get_text(url: reqwest::Url) -> Result<String, FetchError> {
    let resp = reqwest::Client::new()
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    resp.text()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))
}

fn page_origin() -> Result<String, FetchError> {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .ok_or_else(|| FetchError::Request("page origin unavailable".to_string()))
}

/// Absolute URL of a static geometry document.
pub fn geometry_url(origin: &str, config: &EnvConfig, file_name: &str) -> Result<reqwest::Url, FetchError> {
    let url = format!("{}{}", origin.trim_end_matches('/'), config.asset_path(file_name));
    reqwest::Url::parse(&url).map_err(|e| FetchError::Request(e.to_string()))
}

async fn fetch_collection(origin: &str, config: &EnvConfig, file_name: &str) -> Result<FeatureCollection, FetchError> {
    let body = get_text(geometry_url(origin, config, file_name)?).await?;
    FeatureCollection::from_json(&body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Load both district geometry documents. Either failing fails the load.
pub async fn fetch_geometry(config: &EnvConfig) -> Result<DistrictGeometry, FetchError> {
    let origin = page_origin()?;
    let boundaries = fetch_collection(&origin, config, BOUNDARIES_FILE).await?;
    let labels = fetch_collection(&origin, config, LABEL_POINTS_FILE).await?;
    Ok(DistrictGeometry::from_collections(&boundaries, &labels))
}
