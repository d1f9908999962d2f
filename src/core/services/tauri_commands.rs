use js_sys::Reflect;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::error::BoardError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// The binding above throws when the page is not inside a Tauri webview.
fn bridge_present() -> bool {
    web_sys::window()
        .and_then(|window| Reflect::get(&window, &JsValue::from_str("__TAURI__")).ok())
        .is_some_and(|bridge| !bridge.is_undefined() && !bridge.is_null())
}

// Generic Tauri command executor with error handling
pub async fn execute_tauri_command(command: &str, args: serde_json::Value) -> Result<JsValue, BoardError> {
    if !bridge_present() {
        return Err(BoardError::Unavailable(format!("no __TAURI__ bridge for {}", command)));
    }
    let js_args = to_value(&args)?;
    invoke(command, js_args)
        .await
        .map_err(|e| BoardError::from_js(command, &e))
}

pub async fn check_for_updates() -> Result<JsValue, BoardError> {
    execute_tauri_command("check_for_updates", serde_json::json!({})).await
}
