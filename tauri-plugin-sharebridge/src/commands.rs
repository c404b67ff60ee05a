use tauri::{command, AppHandle, Runtime};

use crate::bridge::HandleOutcome;
use crate::models::*;
use crate::Result;
use crate::SharebridgeExt;

/// Return the last share that reached the plugin, if it hasn't been cleared.
///
/// Covers shares that arrived before the frontend registered its event listener.
#[command]
pub(crate) async fn get_pending_share<R: Runtime>(
    app: AppHandle<R>,
) -> Result<PendingShareResponse> {
    Ok(app.sharebridge().pending_share())
}

/// Drop the pending share and remove it from localStorage once it's been handled.
#[command]
pub(crate) async fn clear_pending_share<R: Runtime>(app: AppHandle<R>) -> Result<()> {
    app.sharebridge().clear_pending_share()
}

/// Feed an intent to the bridge from the frontend or a desktop entry point.
///
/// Returns whether the intent was a share and got scheduled for delivery.
#[command]
pub(crate) async fn handle_share_intent<R: Runtime>(
    app: AppHandle<R>,
    intent: ShareIntent,
) -> Result<bool> {
    let outcome = app.sharebridge().handle_intent(&intent);
    Ok(matches!(outcome, HandleOutcome::Dispatched(_)))
}
