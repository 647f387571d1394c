use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Top-level analyzer configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AnalyzerConfig {
    /// Remote analysis service tried before the local pipeline
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Optional reference data files replacing the built-in tables
    #[serde(default)]
    pub reference: ReferenceConfig,
    /// Thresholds used by the suggestion generator
    #[serde(default)]
    pub suggestions: SuggestionThresholds,
    /// Timeout for fetching recipe pages, in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            remote: RemoteConfig::default(),
            reference: ReferenceConfig::default(),
            suggestions: SuggestionThresholds::default(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

/// Configuration for the remote analysis collaborator
#[derive(Debug, Deserialize, Clone)]
pub struct RemoteConfig {
    /// Whether the remote service is consulted at all
    #[serde(default)]
    pub enabled: bool,
    /// Base URL; requests go to `{endpoint}/analyze`
    pub endpoint: Option<String>,
    /// Bearer token sent with each request
    pub api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_remote_timeout")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: None,
            api_key: None,
            timeout_secs: default_remote_timeout(),
        }
    }
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Paths to JSON reference data
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReferenceConfig {
    /// Ingredient knowledge base (array of records)
    pub knowledge_base: Option<PathBuf>,
    /// Taste table (object of keyword to tags)
    pub taste_table: Option<PathBuf>,
}

/// Per-serving limits that trigger suggestions
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SuggestionThresholds {
    #[serde(default = "default_high_calories")]
    pub high_calories: f64,
    #[serde(default = "default_high_sodium")]
    pub high_sodium: f64,
    #[serde(default = "default_low_protein")]
    pub low_protein: f64,
    #[serde(default = "default_high_sugars")]
    pub high_sugars: f64,
}

impl Default for SuggestionThresholds {
    fn default() -> Self {
        Self {
            high_calories: default_high_calories(),
            high_sodium: default_high_sodium(),
            low_protein: default_low_protein(),
            high_sugars: default_high_sugars(),
        }
    }
}

// Default value functions
fn default_fetch_timeout() -> u64 {
    30
}

fn default_remote_timeout() -> u64 {
    10
}

fn default_high_calories() -> f64 {
    800.0
}

fn default_high_sodium() -> f64 {
    1000.0
}

fn default_low_protein() -> f64 {
    10.0
}

fn default_high_sugars() -> f64 {
    50.0
}

impl AnalyzerConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_ANALYZER__ prefix
    /// 2. `path` if given, otherwise analyzer.toml in the current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_ANALYZER__REMOTE__ENDPOINT
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name("analyzer").required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("RECIPE_ANALYZER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
