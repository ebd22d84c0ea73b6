//! Build-time environment configuration.

pub const DEFAULT_DATASET: &str = "production";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    /// Access token for the map tile service. Empty means tiles will fail
    /// to load, which still leaves a working district overlay.
    pub mapbox_token: String,
    /// Content project. `None` runs the site on built-in content only.
    pub sanity_project_id: Option<String>,
    pub sanity_dataset: String,
    /// Prefix for static documents, always ending in `/`.
    pub base_path: String,
}

impl EnvConfig {
    /// Build the configuration from a variable lookup. Empty values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut base_path = var("BASE_PATH").unwrap_or_else(|| "/".to_string());
        if !base_path.ends_with('/') {
            base_path.push('/');
        }

        EnvConfig {
            mapbox_token: var("MAPBOX_TOKEN").unwrap_or_default(),
            sanity_project_id: var("SANITY_PROJECT_ID"),
            sanity_dataset: var("SANITY_DATASET").unwrap_or_else(|| DEFAULT_DATASET.to_string()),
            base_path,
        }
    }

    pub fn content_configured(&self) -> bool {
        self.sanity_project_id.is_some()
    }

    /// Path of a static document relative to the site origin.
    pub fn asset_path(&self, file_name: &str) -> String {
        format!("{}{}", self.base_path, file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> EnvConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let cfg = from_pairs(&[]);
        assert_eq!(cfg.mapbox_token, "");
        assert!(cfg.sanity_project_id.is_none());
        assert!(!cfg.content_configured());
        assert_eq!(cfg.sanity_dataset, "production");
        assert_eq!(cfg.base_path, "/");
    }

    #[test]
    fn test_values_are_read() {
        let cfg = from_pairs(&[
            ("MAPBOX_TOKEN", "pk.abc"),
            ("SANITY_PROJECT_ID", "x1y2z3"),
            ("SANITY_DATASET", "staging"),
            ("BASE_PATH", "/kart/"),
        ]);
        assert_eq!(cfg.mapbox_token, "pk.abc");
        assert_eq!(cfg.sanity_project_id.as_deref(), Some("x1y2z3"));
        assert!(cfg.content_configured());
        assert_eq!(cfg.sanity_dataset, "staging");
        assert_eq!(cfg.base_path, "/kart/");
    }

    #[test]
    fn test_empty_project_id_means_unconfigured() {
        let cfg = from_pairs(&[("SANITY_PROJECT_ID", "  ")]);
        assert!(!cfg.content_configured());
    }

    #[test]
    fn test_base_path_gets_trailing_slash() {
        let cfg = from_pairs(&[("BASE_PATH", "/kart")]);
        assert_eq!(cfg.asset_path("oslo_bydeler.geojson"), "/kart/oslo_bydeler.geojson");
    }
}
