use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use url::Url;

use crate::transport::resolve_predict_url;

pub const SETTINGS_FILE: &str = "predictor.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_url: String,
    pub guard_resubmission: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".into(),
            guard_resubmission: false,
        }
    }
}

impl ClientSettings {
    pub fn predict_url(&self) -> anyhow::Result<Url> {
        resolve_predict_url(&self.server_url)
            .with_context(|| format!("invalid server url '{}'", self.server_url))
    }
}

/// On-disk shape of `predictor.toml`. Keys are read independently so one
/// badly typed value does not discard the rest.
#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<toml::Value>,
    guard_resubmission: Option<toml::Value>,
}

fn toml_string(value: &toml::Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn toml_bool(value: &toml::Value) -> Option<bool> {
    match value {
        toml::Value::Boolean(flag) => Some(*flag),
        toml::Value::String(raw) => raw.parse::<bool>().ok(),
        _ => None,
    }
}

pub fn load_settings() -> ClientSettings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the settings file, then the environment.
pub fn load_settings_from(
    settings_path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(settings_path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.server_url.as_ref().and_then(toml_string) {
                    settings.server_url = v;
                }
                if let Some(v) = file_cfg.guard_resubmission.as_ref().and_then(toml_bool) {
                    settings.guard_resubmission = v;
                }
            }
            Err(err) => {
                tracing::warn!(
                    path = %settings_path.display(),
                    "ignoring unreadable settings file: {err}"
                );
            }
        }
    }

    if let Some(v) = env("PREDICTOR_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = env("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = env("APP__GUARD_RESUBMISSION") {
        if let Ok(parsed) = v.parse::<bool>() {
            settings.guard_resubmission = parsed;
        }
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
