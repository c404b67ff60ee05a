use tauri::{
    plugin::{Builder, TauriPlugin},
    webview::PageLoadEvent,
    Manager, RunEvent, Runtime,
};

pub use bridge::{HandleOutcome, ShareIntentBridge, ShareSink, UiDispatcher};
pub use config::Config;
pub use extract::extract_share;
pub use models::*;
pub use script::escape_js_string;
pub use state::Sharebridge;

#[cfg(desktop)]
mod desktop;
#[cfg(mobile)]
mod mobile;

mod bridge;
mod commands;
mod config;
mod error;
mod extract;
mod models;
mod script;
mod state;
mod webview;

pub use error::{Error, Result};

#[cfg(desktop)]
use desktop::PlatformIntents;
#[cfg(mobile)]
use mobile::PlatformIntents;

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the sharebridge APIs.
pub trait SharebridgeExt<R: Runtime> {
    fn sharebridge(&self) -> &Sharebridge<R>;
}

impl<R: Runtime, T: Manager<R>> crate::SharebridgeExt<R> for T {
    fn sharebridge(&self) -> &Sharebridge<R> {
        self.state::<Sharebridge<R>>().inner()
    }
}

/// Initializes the sharebridge plugin.
///
/// Share intents the app is opened with, or resumed with, are turned into a
/// JSON record and pushed into the webview:
/// - stored in localStorage (`pendingShareData`, `pendingShareDataTimestamp`)
/// - dispatched as a `shareIntent` DOM event and Tauri event
///
/// Names are configurable under `plugins.sharebridge` in `tauri.conf.json`.
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<Config>> {
    Builder::<R, Option<Config>>::new("sharebridge")
        .invoke_handler(tauri::generate_handler![
            commands::get_pending_share,
            commands::clear_pending_share,
            commands::handle_share_intent,
        ])
        .setup(|app, api| {
            let config = api.config().clone().unwrap_or_default();
            tracing::debug!("sharebridge config: {:?}", config);

            #[cfg(mobile)]
            let intents = mobile::init(app, api)?;
            #[cfg(desktop)]
            let intents = desktop::init(app, api)?;
            app.manage(Sharebridge::new(app, intents, config));
            Ok(())
        })
        .on_page_load(|webview, payload| {
            // The webview can't receive anything before its first load finishes
            if !matches!(payload.event(), PageLoadEvent::Finished) {
                return;
            }
            let sharebridge = webview.sharebridge();
            if webview.label() == sharebridge.config().webview_label {
                sharebridge.check_current_intent();
            }
        })
        .on_event(|app, event| {
            if let RunEvent::Resumed = event {
                tracing::info!("sharebridge: app resumed");
                app.sharebridge().check_current_intent();
            }
        })
        .build()
}
