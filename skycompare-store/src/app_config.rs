use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_flight_count")]
    pub flight_count: usize,
    /// Artificial delay before results are delivered
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_flight_count() -> usize { 15 }
fn default_latency_ms() -> u64 { 1500 }
fn default_currency() -> String { "INR".to_string() }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            flight_count: default_flight_count(),
            latency_ms: default_latency_ms(),
            currency: default_currency(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HistoryBackend {
    #[default]
    Memory,
    File,
    Redis,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HistoryConfig {
    #[serde(default)]
    pub backend: HistoryBackend,
    /// JSON file used by the `file` backend
    pub path: Option<String>,
    pub redis_url: Option<String>,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_storage_key() -> String { crate::history::SEARCH_HISTORY_KEY.to_string() }
fn default_capacity() -> usize { 10 }

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            backend: HistoryBackend::default(),
            path: None,
            redis_url: None,
            storage_key: default_storage_key(),
            capacity: default_capacity(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name(&format!("{}/default", dir)))
            // Add in the current environment file, defaults to 'development'
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // Eg.. `SKYCOMPARE_SEARCH__LATENCY_MS=0` sets `search.latency_ms`
            .add_source(config::Environment::with_prefix("SKYCOMPARE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
