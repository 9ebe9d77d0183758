use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional server features are active.
///
/// Loaded from `config.toml` at server startup. Every field defaults to
/// `false` so that a missing or incomplete config file disables all
/// optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Forward contact submissions by email through the Mailgun HTTP API.
    #[serde(default)]
    pub mailgun: bool,
    /// Rate-limit the contact endpoint per client address.
    #[serde(default)]
    pub rate_limit: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}
