use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info};

use crate::extract::extract_share;
use crate::models::{PendingShare, ShareIntent};
use crate::Result;

/// Something that can take a serialized share record and its capture time,
/// i.e. the hosted web runtime.
pub trait ShareSink: Send + Sync + 'static {
    fn deliver(&self, record_json: &str, timestamp_ms: i64) -> Result<()>;

    /// Forget a previously delivered record.
    fn clear(&self) -> Result<()>;
}

/// Runs work on the thread that owns the web runtime.
pub trait UiDispatcher: Send + Sync {
    fn dispatch(&self, task: Box<dyn FnOnce() + Send + 'static>) -> Result<()>;
}

#[derive(Debug)]
pub enum HandleOutcome {
    /// Not a share intent; nothing was delivered
    Ignored,
    /// Delivery was scheduled on the UI thread
    Dispatched(PendingShare),
    /// Serialization or scheduling failed; the share is dropped
    Failed,
}

/// Converts share intents into records and pushes them into the web runtime.
///
/// Never returns an error: failures are logged and the share is dropped.
pub struct ShareIntentBridge<S: ShareSink, D: UiDispatcher> {
    sink: Arc<S>,
    dispatcher: D,
    capture_extras: bool,
}

impl<S: ShareSink, D: UiDispatcher> ShareIntentBridge<S, D> {
    pub fn new(sink: S, dispatcher: D, capture_extras: bool) -> Self {
        Self {
            sink: Arc::new(sink),
            dispatcher,
            capture_extras,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn handle(&self, intent: &ShareIntent) -> HandleOutcome {
        info!(
            "Share intent received: action={:?}, type={:?}",
            intent.action, intent.mime_type
        );

        let Some(share) = extract_share(intent, self.capture_extras) else {
            debug!("Intent is not a share, ignoring");
            return HandleOutcome::Ignored;
        };

        let record_json = match serde_json::to_string(&share) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize share data: {}", e);
                return HandleOutcome::Failed;
            }
        };
        let timestamp = Utc::now().timestamp_millis();

        let sink = self.sink.clone();
        let task = Box::new(move || {
            if let Err(e) = sink.deliver(&record_json, timestamp) {
                error!("Failed to deliver share to webview: {}", e);
            } else {
                debug!("Share delivered to webview ({} chars)", record_json.len());
            }
        });

        if let Err(e) = self.dispatcher.dispatch(task) {
            error!("Failed to schedule share delivery: {}", e);
            return HandleOutcome::Failed;
        }

        HandleOutcome::Dispatched(PendingShare { share, timestamp })
    }
}
