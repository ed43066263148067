use serde::{Deserialize, Serialize};

use crate::store::NotifyPolicy;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Store behaviour.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Whether no-op transitions still push to subscribers (default: changed).
    #[serde(default)]
    pub notify: NotifyPolicy,
}

/// Terminal display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Title of the counter panel (default: "Counter").
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_title() -> String {
    "Counter".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            title: default_title(),
        }
    }
}
