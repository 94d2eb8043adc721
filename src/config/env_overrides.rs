use super::Config;
use std::path::PathBuf;

/// Credential variables, highest priority first.
pub const API_KEY_VARS: [&str; 3] = ["AURASTYLE_API_KEY", "GEMINI_API_KEY", "API_KEY"];

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Some(key) = API_KEY_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|key| !key.trim().is_empty())
        {
            self.api_key = Some(key.trim().to_string());
        }

        if let Ok(dir) = std::env::var("AURASTYLE_DATA_DIR")
            && !dir.is_empty()
        {
            self.data_dir = PathBuf::from(dir);
        }

        if let Ok(model) = std::env::var("AURASTYLE_CLASSIFY_MODEL")
            && !model.is_empty()
        {
            self.classify_model = model;
        }

        if let Ok(model) = std::env::var("AURASTYLE_SUGGEST_MODEL")
            && !model.is_empty()
        {
            self.suggest_model = model;
        }

        if let Ok(temp_str) = std::env::var("AURASTYLE_TEMPERATURE")
            && let Ok(temp) = temp_str.parse::<f64>()
            && (0.0..=2.0).contains(&temp)
        {
            self.temperature = temp;
        }
    }
}
