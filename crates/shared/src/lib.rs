pub mod choropleth;
pub mod config;
pub mod content;
pub mod fallbacks;
pub mod format;
pub mod geo;
pub mod map;
pub mod models;
pub mod shell;
pub mod theme;
pub mod valuation;
pub mod viewport;
