use oslo_shared::config::EnvConfig;

/// Configuration baked in at build time.
pub fn env() -> EnvConfig {
    EnvConfig::from_lookup(|key| {
        let value = match key {
            "MAPBOX_TOKEN" => option_env!("MAPBOX_TOKEN"),
            "SANITY_PROJECT_ID" => option_env!("SANITY_PROJECT_ID"),
            "SANITY_DATASET" => option_env!("SANITY_DATASET"),
            "BASE_PATH" => option_env!("BASE_PATH"),
            _ => None,
        };
        value.map(str::to_string)
    })
}
