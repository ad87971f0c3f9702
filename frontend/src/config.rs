use leptos::{provide_context, use_context};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Variant;

/// Name of the optional window global the host page may set, e.g.
/// `window.__EMPTY_STATE_CONFIG = { default_variant: "compact" }`.
pub const CONFIG_GLOBAL: &str = "__EMPTY_STATE_CONFIG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub default_variant: Variant,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid runtime config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("runtime config global could not be serialized to JSON")]
    NotSerializable,
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(target_arch = "wasm32")]
fn read_window_config() -> Result<Option<RuntimeConfig>, ConfigError> {
    let w = match web_sys::window() {
        Some(win) => win,
        None => return Ok(None),
    };
    let any = match js_sys::Reflect::get(&w, &CONFIG_GLOBAL.into()) {
        Ok(value) => value,
        Err(_) => return Ok(None),
    };
    if any.is_undefined() || any.is_null() {
        return Ok(None);
    }
    let raw = js_sys::JSON::stringify(&any)
        .map(String::from)
        .map_err(|_| ConfigError::NotSerializable)?;
    RuntimeConfig::from_json(&raw).map(Some)
}

/// Reads the host page's runtime config. Problems are logged and replaced
/// with defaults; rendering never depends on this succeeding.
#[cfg(target_arch = "wasm32")]
pub fn load() -> RuntimeConfig {
    match read_window_config() {
        Ok(Some(cfg)) => cfg,
        Ok(None) => RuntimeConfig::default(),
        Err(err) => {
            log::warn!("{err}; falling back to defaults");
            RuntimeConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> RuntimeConfig {
    RuntimeConfig::default()
}

pub fn provide_runtime_config(config: RuntimeConfig) {
    provide_context(config);
}

pub fn use_runtime_config() -> RuntimeConfig {
    use_context::<RuntimeConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_variant() {
        let cfg = RuntimeConfig::from_json(r#"{"default_variant":"compact"}"#).unwrap();
        assert_eq!(cfg.default_variant, Variant::Compact);
    }

    #[test]
    fn missing_and_unknown_keys_fall_back_to_defaults() {
        let cfg = RuntimeConfig::from_json(r#"{"api_base_url":"http://localhost"}"#).unwrap();
        assert_eq!(cfg, RuntimeConfig::default());
        assert_eq!(cfg.default_variant, Variant::Default);
    }

    #[test]
    fn unknown_variant_is_a_config_error() {
        let err = RuntimeConfig::from_json(r#"{"default_variant":"dense"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("invalid runtime config"));
    }
}
