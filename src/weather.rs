use serde::{Deserialize, Serialize};

/// Current conditions shown on the dashboard and fed to outfit suggestions.
///
/// There is no live weather feed; the value comes from the `[weather]`
/// section of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInfo {
    /// Temperature in degrees Celsius.
    #[serde(default = "default_temp")]
    pub temp: f64,
    #[serde(default = "default_condition")]
    pub condition: String,
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_temp() -> f64 {
    22.0
}

fn default_condition() -> String {
    "Sunny".into()
}

fn default_icon() -> String {
    "☀️".into()
}

impl Default for WeatherInfo {
    fn default() -> Self {
        Self {
            temp: default_temp(),
            condition: default_condition(),
            icon: default_icon(),
        }
    }
}

impl WeatherInfo {
    /// One-line form used in prompts, e.g. `22°C, Sunny`.
    pub fn summary(&self) -> String {
        format!("{}°C, {}", self.temp, self.condition)
    }
}
