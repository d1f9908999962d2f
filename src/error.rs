#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("capability unavailable: {0}")]
    Unavailable(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("bridge error: {0}")]
    Bridge(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_wasm_bindgen::Error),
}

impl BoardError {
    /// Wraps a thrown JS value, keeping its string form when it has one.
    pub fn from_js(context: &str, value: &wasm_bindgen::JsValue) -> Self {
        let detail = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        BoardError::Bridge(format!("{}: {}", context, detail))
    }
}
