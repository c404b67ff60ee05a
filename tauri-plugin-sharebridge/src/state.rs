use std::sync::{Mutex, MutexGuard};

use tauri::{AppHandle, Runtime};
use tracing::{debug, error, info};

use crate::bridge::{HandleOutcome, ShareIntentBridge, ShareSink};
use crate::config::Config;
use crate::models::{PendingShare, PendingShareResponse, ShareIntent};
use crate::webview::{MainThreadDispatcher, WebviewSink};
use crate::PlatformIntents;
use crate::Result;

/// Last share handed to the bridge, kept until the frontend clears it.
#[derive(Default)]
pub(crate) struct PendingSlot(Mutex<Option<PendingShare>>);

impl PendingSlot {
    /// Only a dispatched share replaces the slot.
    pub fn record(&self, outcome: &HandleOutcome) {
        if let HandleOutcome::Dispatched(pending) = outcome {
            *self.lock() = Some(pending.clone());
        }
    }

    pub fn response(&self) -> PendingShareResponse {
        self.lock().clone().into()
    }

    /// Empties the slot, then removes the record from the web runtime.
    /// The slot stays empty even if the sink fails.
    pub fn clear<S: ShareSink>(&self, sink: &S) -> Result<()> {
        if self.lock().take().is_some() {
            debug!("Cleared pending share");
        }
        sink.clear()
    }

    fn lock(&self) -> MutexGuard<'_, Option<PendingShare>> {
        // The slot holds plain data, a poisoned lock still has a usable value
        self.0.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Plugin state managed by Tauri, reachable through [`crate::SharebridgeExt`].
pub struct Sharebridge<R: Runtime> {
    bridge: ShareIntentBridge<WebviewSink<R>, MainThreadDispatcher<R>>,
    intents: PlatformIntents<R>,
    pending: PendingSlot,
}

impl<R: Runtime> Sharebridge<R> {
    pub(crate) fn new(app: &AppHandle<R>, intents: PlatformIntents<R>, config: Config) -> Self {
        let capture_extras = config.capture_extras;
        Self {
            bridge: ShareIntentBridge::new(
                WebviewSink::new(app.clone(), config),
                MainThreadDispatcher::new(app.clone()),
                capture_extras,
            ),
            intents,
            pending: PendingSlot::default(),
        }
    }

    pub fn config(&self) -> &Config {
        self.bridge.sink().config()
    }

    /// Run an intent through the bridge, remembering it if it was a share.
    pub fn handle_intent(&self, intent: &ShareIntent) -> HandleOutcome {
        let outcome = self.bridge.handle(intent);
        self.pending.record(&outcome);
        outcome
    }

    /// Ask the platform for the intent the app was opened or resumed with.
    pub fn check_current_intent(&self) {
        match self.intents.take_intent() {
            Ok(Some(intent)) => {
                info!("Processing share intent from platform");
                self.handle_intent(&intent);
            }
            Ok(None) => debug!("No share intent pending on platform"),
            Err(e) => error!("Failed to read share intent from platform: {}", e),
        }
    }

    pub fn pending_share(&self) -> PendingShareResponse {
        self.pending.response()
    }

    pub fn clear_pending_share(&self) -> Result<()> {
        self.pending.clear(self.bridge.sink())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::testing::{ClosedDispatcher, InlineDispatcher, RecordingSink};
    use crate::models::ACTION_SEND;

    fn text_intent(text: &str) -> ShareIntent {
        ShareIntent {
            action: Some(ACTION_SEND.to_string()),
            mime_type: Some("text/plain".to_string()),
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_dispatched_share_fills_slot() {
        let bridge = ShareIntentBridge::new(RecordingSink::default(), InlineDispatcher, true);
        let slot = PendingSlot::default();

        slot.record(&bridge.handle(&text_intent("first")));
        slot.record(&bridge.handle(&text_intent("second")));

        let response = slot.response();
        assert!(response.has_pending);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["share"]["text"], "second");
        assert!(value["timestamp"].is_i64());
    }

    #[test]
    fn test_ignored_and_failed_leave_slot_alone() {
        let bridge = ShareIntentBridge::new(RecordingSink::default(), InlineDispatcher, true);
        let closed = ShareIntentBridge::new(RecordingSink::default(), ClosedDispatcher, true);
        let slot = PendingSlot::default();

        slot.record(&bridge.handle(&ShareIntent::default()));
        slot.record(&closed.handle(&text_intent("dropped")));
        assert!(!slot.response().has_pending);

        slot.record(&bridge.handle(&text_intent("kept")));
        slot.record(&bridge.handle(&ShareIntent::default()));
        slot.record(&closed.handle(&text_intent("dropped")));

        let value = serde_json::to_value(slot.response()).unwrap();
        assert_eq!(value["share"]["text"], "kept");
    }

    #[test]
    fn test_clear_empties_slot_and_sink() {
        let bridge = ShareIntentBridge::new(RecordingSink::default(), InlineDispatcher, true);
        let slot = PendingSlot::default();
        slot.record(&bridge.handle(&text_intent("done")));

        slot.clear(bridge.sink()).unwrap();

        assert!(!slot.response().has_pending);
        assert_eq!(*bridge.sink().clears.lock().unwrap(), 1);
    }

    #[test]
    fn test_clear_empties_slot_when_sink_fails() {
        let sink = RecordingSink {
            fail_clear: true,
            ..Default::default()
        };
        let bridge = ShareIntentBridge::new(sink, InlineDispatcher, true);
        let slot = PendingSlot::default();
        slot.record(&bridge.handle(&text_intent("done")));

        assert!(slot.clear(bridge.sink()).is_err());
        assert!(!slot.response().has_pending);
    }
}
