use crate::error::ConfigError;
use crate::weather::WeatherInfo;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the durable wardrobe slot - computed, not serialized
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Model used to classify captured item photos.
    #[serde(default = "default_classify_model")]
    pub classify_model: String,

    /// Model used to pick the daily outfit.
    #[serde(default = "default_suggest_model")]
    pub suggest_model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default)]
    pub weather: WeatherInfo,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.into()
}

fn default_classify_model() -> String {
    "gemini-3-flash-preview".into()
}

fn default_suggest_model() -> String {
    "gemini-3-pro-preview".into()
}

fn default_temperature() -> f64 {
    0.4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            config_path: PathBuf::new(),
            api_key: None,
            api_base_url: default_api_base_url(),
            classify_model: default_classify_model(),
            suggest_model: default_suggest_model(),
            temperature: default_temperature(),
            weather: WeatherInfo::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Validation(format!(
                "temperature must be within 0.0..=2.0, got {}",
                self.temperature
            )));
        }
        if self.classify_model.trim().is_empty() || self.suggest_model.trim().is_empty() {
            return Err(ConfigError::Validation("model names must not be empty".into()));
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(format!(
                "api_base_url must be an http(s) URL, got {:?}",
                self.api_base_url
            )));
        }
        Ok(())
    }
}
