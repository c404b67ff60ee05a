//! Turns a raw [`ShareIntent`] into the [`ShareData`] record.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{ShareAction, ShareData, ShareIntent, ShareKind};

/// Build the record for an intent.
///
/// Returns `None` when the intent is not a share we handle: no share action,
/// or no declared type.
pub fn extract_share(intent: &ShareIntent, capture_extras: bool) -> Option<ShareData> {
    let action = intent.action.as_deref()?;
    let share_action = ShareAction::parse(action)?;
    let mime_type = intent.mime_type.as_deref()?;

    let kind = match share_action {
        ShareAction::Send => single_share_kind(intent, mime_type),
        ShareAction::SendMultiple => ShareKind::Multiple {
            uris: intent.streams.clone(),
        },
    };

    let all_extras = if capture_extras {
        stringify_extras(&intent.extras)
    } else {
        BTreeMap::new()
    };

    debug!(
        "Extracted share: action={}, type={}, clip items={}, extras={}",
        action,
        mime_type,
        intent.clip_items.len(),
        all_extras.len()
    );

    Some(ShareData {
        action: action.to_string(),
        mime_type: mime_type.to_string(),
        kind,
        all_extras,
    })
}

fn single_share_kind(intent: &ShareIntent, mime_type: &str) -> ShareKind {
    let text = intent.text.clone();

    if mime_type == "text/plain" {
        ShareKind::Text {
            text,
            subject: intent.subject.clone(),
        }
    } else if mime_type.starts_with("video/") {
        ShareKind::Video {
            uri: intent.stream.clone(),
            text,
            clip_data: intent.clip_items.clone(),
        }
    } else if mime_type.starts_with("image/") {
        ShareKind::Image {
            uri: intent.stream.clone(),
            text,
        }
    } else {
        ShareKind::Other
    }
}

/// Strings are copied verbatim, every other value in its compact JSON form.
/// Null extras are skipped.
pub fn stringify_extras(extras: &BTreeMap<String, serde_json::Value>) -> BTreeMap<String, String> {
    extras
        .iter()
        .filter_map(|(key, value)| {
            let value = match value {
                serde_json::Value::Null => return None,
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((key.clone(), value))
        })
        .collect()
}
