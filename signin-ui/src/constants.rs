// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use signin_types::config::DEFAULT_SUBMIT_DELAY_MS;
use signin_types::{truthy, ClientId, SignInError};
use wasm_bindgen::JsValue;
use web_sys::window;

// Read at compile time; used only when `window.__APP_CONFIG` has no client id.
pub const BUILD_GOOGLE_CLIENT_ID: Option<&str> = std::option_env!("GOOGLE_CLIENT_ID");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "googleClientId")]
    #[serde(default)]
    pub google_client_id: Option<String>,
    #[serde(rename = "submitDelayMs")]
    #[serde(default)]
    pub submit_delay_ms: Option<u32>,
    #[serde(rename = "oneTap")]
    #[serde(default)]
    pub one_tap: Option<String>,
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let Some(win) = window() else {
        return Err("No global window".to_string());
    };
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

/// Resolve the client id: an explicit value wins, then the runtime config,
/// then the build environment.
pub fn google_client_id(explicit: Option<&str>) -> Result<ClientId, SignInError> {
    if let Some(id) = explicit {
        return ClientId::parse(Some(id));
    }
    let runtime = app_config().ok().and_then(|c| c.google_client_id);
    ClientId::parse(runtime.as_deref().or(BUILD_GOOGLE_CLIENT_ID))
}

pub fn submit_delay_ms() -> u32 {
    app_config()
        .ok()
        .and_then(|c| c.submit_delay_ms)
        .unwrap_or(DEFAULT_SUBMIT_DELAY_MS)
}

pub fn one_tap_enabled() -> bool {
    app_config()
        .map(|c| truthy(c.one_tap.as_deref()))
        .unwrap_or(false)
}
