use std::fs;

use client_core::DEFAULT_API_BASE_URL;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// Defaults, overridden by `admin.toml` in the working directory,
/// overridden by environment variables.
pub fn load_settings() -> Settings {
    settings_from(
        fs::read_to_string("admin.toml").ok().as_deref(),
        |name| std::env::var(name).ok(),
    )
}

fn settings_from(
    file_contents: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file_contents {
        if let Ok(file_cfg) = toml::from_str::<Settings>(raw) {
            settings = file_cfg;
        }
    }

    if let Some(v) = env("API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = env("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    settings
}
