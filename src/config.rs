use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::BoardError;
use crate::models::DONE_COLUMN_ID;

/// Global the host page may set to override defaults.
pub const CONFIG_GLOBAL: &str = "__BOARD_CONFIG__";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    pub done_column_id: String,
    pub dismissed_version_key: String,
    pub dismiss_delay_ms: u32,
    pub update_event: String,
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            done_column_id: DONE_COLUMN_ID.into(),
            dismissed_version_key: "card-board.dismissed-update-version".into(),
            dismiss_delay_ms: 300,
            update_event: "update-check".into(),
            log_level: "info".into(),
        }
    }
}

impl BoardConfig {
    pub fn from_value(value: JsValue) -> Result<Self, BoardError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_wasm_bindgen::from_value(value)?)
    }

    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        match Self::from_value(raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring invalid {}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }

    pub fn level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_overrides_keep_defaults() {
        let config: BoardConfig =
            serde_json::from_str(r#"{"dismissDelayMs": 500, "logLevel": "debug"}"#).unwrap();
        assert_eq!(config.dismiss_delay_ms, 500);
        assert_eq!(config.level(), tracing::Level::DEBUG);
        assert_eq!(config.done_column_id, "done");
        assert_eq!(config.dismissed_version_key, BoardConfig::default().dismissed_version_key);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let config = BoardConfig { log_level: "chatty".into(), ..BoardConfig::default() };
        assert_eq!(config.level(), tracing::Level::INFO);
    }
}
