use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub directory: DirectorySettings,
    #[serde(default)]
    pub routing: RoutingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Hospital directory service (the persistence collaborator owning the roster)
#[derive(Debug, Clone, Deserialize)]
pub struct DirectorySettings {
    #[serde(default = "default_directory_endpoint")]
    pub endpoint: String,
    pub api_key: Option<String>,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            endpoint: default_directory_endpoint(),
            api_key: None,
        }
    }
}

fn default_directory_endpoint() -> String {
    "http://localhost:8000".to_string()
}

/// Road-routing provider settings
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingSettings {
    #[serde(default = "default_routing_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_routing_timeout")]
    pub timeout_secs: u64,
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            endpoint: default_routing_endpoint(),
            timeout_secs: default_routing_timeout(),
        }
    }
}

fn default_routing_endpoint() -> String {
    "http://router.project-osrm.org".to_string()
}

fn default_routing_timeout() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_eta_weight")]
    pub eta: f64,
    #[serde(default = "default_beds_weight")]
    pub beds: f64,
    #[serde(default = "default_specialist_weight")]
    pub specialist: f64,
    #[serde(default = "default_affordability_weight")]
    pub affordability: f64,
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            eta: default_eta_weight(),
            beds: default_beds_weight(),
            specialist: default_specialist_weight(),
            affordability: default_affordability_weight(),
            rating: default_rating_weight(),
        }
    }
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            eta: config.eta,
            beds: config.beds,
            specialist: config.specialist,
            affordability: config.affordability,
            rating: config.rating,
        }
    }
}

fn default_eta_weight() -> f64 { 0.40 }
fn default_beds_weight() -> f64 { 0.20 }
fn default_specialist_weight() -> f64 { 0.20 }
fn default_affordability_weight() -> f64 { 0.10 }
fn default_rating_weight() -> f64 { 0.10 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

fn default_top_n() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with DISPATCH_)
    ///    e.g. DISPATCH__ROUTING__ENDPOINT -> routing.endpoint
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("DISPATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("DISPATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
