use serde::{Deserialize, Serialize};

/// Payload delivered by the platform bridge after an update check.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCheckResult {
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub version: Option<String>,
}

impl UpdateCheckResult {
    pub fn available(version: impl Into<String>) -> Self {
        Self {
            available: true,
            version: Some(version.into()),
        }
    }

    /// The version to announce, if this result should be shown at all.
    pub fn qualifying_version(&self) -> Option<&str> {
        if !self.available {
            return None;
        }
        self.version.as_deref().filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInfo {
    pub version: String,
}
