use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_KEY: &str = "pendingShareData";
pub const DEFAULT_TIMESTAMP_KEY: &str = "pendingShareDataTimestamp";
pub const DEFAULT_EVENT_NAME: &str = "shareIntent";
pub const DEFAULT_WEBVIEW_LABEL: &str = "main";

/// Plugin configuration, read from `plugins.sharebridge` in `tauri.conf.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// localStorage key the serialized record is written under
    pub storage_key: String,
    /// localStorage key for the capture time (ms since epoch)
    pub timestamp_key: String,
    /// Name of the DOM / Tauri event carrying the record
    pub event_name: String,
    /// Whether every intent extra is copied into `allExtras`
    pub capture_extras: bool,
    /// Label of the webview that receives shares
    pub webview_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            timestamp_key: DEFAULT_TIMESTAMP_KEY.to_string(),
            event_name: DEFAULT_EVENT_NAME.to_string(),
            capture_extras: true,
            webview_label: DEFAULT_WEBVIEW_LABEL.to_string(),
        }
    }
}
