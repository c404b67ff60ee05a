use serde::de::DeserializeOwned;
use tauri::{plugin::PluginApi, AppHandle, Runtime};

use crate::models::ShareIntent;

/// Initialize the desktop intent source.
pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    _api: PluginApi<R, C>,
) -> crate::Result<PlatformIntents<R>> {
    Ok(PlatformIntents(app.clone()))
}

/// Desktop has no OS share intents. Shares only arrive through
/// `handle_share_intent` or [`crate::Sharebridge::handle_intent`].
pub struct PlatformIntents<R: Runtime>(#[allow(dead_code)] AppHandle<R>);

impl<R: Runtime> PlatformIntents<R> {
    pub fn take_intent(&self) -> crate::Result<Option<ShareIntent>> {
        Ok(None)
    }
}
