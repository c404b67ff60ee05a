use tauri::{AppHandle, Emitter, Manager, Runtime};
use tracing::warn;

use crate::bridge::{ShareSink, UiDispatcher};
use crate::config::Config;
use crate::script::{clear_script, delivery_script};
use crate::{Error, Result};

/// Delivers share records into the configured webview.
pub struct WebviewSink<R: Runtime> {
    app: AppHandle<R>,
    config: Config,
}

impl<R: Runtime> WebviewSink<R> {
    pub fn new(app: AppHandle<R>, config: Config) -> Self {
        Self { app, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn eval(&self, script: &str) -> Result<()> {
        let label = &self.config.webview_label;
        let webview = self
            .app
            .get_webview(label)
            .ok_or_else(|| Error::WebviewNotFound(label.clone()))?;
        webview.eval(script)?;
        Ok(())
    }

    fn emit(&self, record_json: &str) -> Result<()> {
        let payload: serde_json::Value = serde_json::from_str(record_json)?;
        self.app.emit(&self.config.event_name, payload)?;
        Ok(())
    }
}

impl<R: Runtime> ShareSink for WebviewSink<R> {
    fn deliver(&self, record_json: &str, timestamp_ms: i64) -> Result<()> {
        self.eval(&delivery_script(&self.config, record_json, timestamp_ms))?;

        // Also reachable through `listen()` from @tauri-apps/api. The share already
        // reached the DOM at this point, so a failed emit doesn't fail the delivery.
        if let Err(e) = self.emit(record_json) {
            warn!("Share stored in webview but Tauri event emit failed: {}", e);
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.eval(&clear_script(&self.config))
    }
}

/// Schedules work on the Tauri main thread, which owns the webviews.
pub struct MainThreadDispatcher<R: Runtime>(AppHandle<R>);

impl<R: Runtime> MainThreadDispatcher<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self(app)
    }
}

impl<R: Runtime> UiDispatcher for MainThreadDispatcher<R> {
    fn dispatch(&self, task: Box<dyn FnOnce() + Send + 'static>) -> Result<()> {
        self.0
            .run_on_main_thread(task)
            .map_err(|e| Error::Dispatch(e.to_string()))
    }
}
