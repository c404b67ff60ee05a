use serde::de::DeserializeOwned;
use tauri::{
    plugin::{PluginApi, PluginHandle},
    AppHandle, Runtime,
};

use crate::models::ShareIntent;

/// Register with the native layer, which holds on to the activity's current intent.
///
/// A missing native plugin is not fatal: the app still starts and shares can
/// be submitted through `handle_share_intent`.
pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    api: PluginApi<R, C>,
) -> crate::Result<PlatformIntents<R>> {
    #[cfg(target_os = "android")]
    let handle = match api.register_android_plugin("app.sharebridge", "ShareBridgePlugin") {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!("Native ShareBridgePlugin not available, OS share intents disabled: {}", e);
            None
        }
    };
    // iOS share extensions hand content over through the app itself, which
    // forwards it with `handle_share_intent`.
    #[cfg(target_os = "ios")]
    let handle = {
        let _ = api;
        tracing::info!("sharebridge: no native intent source on iOS");
        None
    };
    let _ = app;
    Ok(PlatformIntents(handle))
}

/// Source of OS share intents on mobile.
///
/// Native contract (Android, package `app.sharebridge`, class `ShareBridgePlugin`):
/// the plugin answers `takeShareIntent` with either `null` or a JSON object
/// shaped like [`ShareIntent`], camelCase:
///
/// ```json
/// {
///   "action": "android.intent.action.SEND",
///   "mimeType": "video/mp4",
///   "text": "…", "subject": "…",
///   "stream": "content://…",
///   "streams": ["content://…"],
///   "clipItems": [{ "text": "…", "uri": "…" }],
///   "extras": { "android.intent.extra.TEXT": "…" }
/// }
/// ```
///
/// Every field is optional. A take consumes the intent: the native side hands
/// each intent it got in `onCreate`/`onNewIntent` out once and answers `null`
/// afterwards, so a page reload doesn't replay an old share.
pub struct PlatformIntents<R: Runtime>(Option<PluginHandle<R>>);

impl<R: Runtime> PlatformIntents<R> {
    pub fn take_intent(&self) -> crate::Result<Option<ShareIntent>> {
        let Some(handle) = &self.0 else {
            return Ok(None);
        };
        handle
            .run_mobile_plugin("takeShareIntent", ())
            .map_err(Into::into)
    }
}
