use courier_core::ProviderOptions;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Per-provider settings. `options` is handed to the provider untouched.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub options: ProviderOptions,
}

fn default_enabled() -> bool { true }

pub fn run_mode() -> String {
    env::var("RUN_MODE").unwrap_or_else(|_| "development".into())
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = run_mode();

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `COURIER__SERVER__PORT=8080`
            .add_source(config::Environment::with_prefix("COURIER").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Enabled providers, sorted by identifier
    pub fn enabled_providers(&self) -> Vec<(&str, &ProviderConfig)> {
        let mut enabled: Vec<(&str, &ProviderConfig)> = self
            .providers
            .iter()
            .filter(|(_, p)| p.enabled)
            .map(|(id, p)| (id.as_str(), p))
            .collect();
        enabled.sort_by_key(|(id, _)| *id);
        enabled
    }
}
