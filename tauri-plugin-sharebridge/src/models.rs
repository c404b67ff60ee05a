use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

pub const ACTION_SEND: &str = "android.intent.action.SEND";
pub const ACTION_SEND_MULTIPLE: &str = "android.intent.action.SEND_MULTIPLE";

/// A share intent as handed over by the native layer.
///
/// `extras` is the complete extras bundle of the intent, so the typed fields
/// (`text`, `subject`, `stream`) usually show up there a second time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareIntent {
    pub action: Option<String>,
    pub mime_type: Option<String>,
    pub text: Option<String>,
    pub subject: Option<String>,
    /// Single URI payload (`EXTRA_STREAM`)
    pub stream: Option<String>,
    /// URI payloads of a multi-share, in the order the sender listed them
    pub streams: Vec<String>,
    pub clip_items: Vec<ClipItem>,
    pub extras: BTreeMap<String, serde_json::Value>,
}

/// Auxiliary clip item attached to an intent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClipItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareAction {
    Send,
    SendMultiple,
}

impl ShareAction {
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            ACTION_SEND => Some(Self::Send),
            ACTION_SEND_MULTIPLE => Some(Self::SendMultiple),
            _ => None,
        }
    }
}

/// What was shared, carrying only the fields that make sense for that kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ShareKind {
    Text {
        text: Option<String>,
        subject: Option<String>,
    },
    /// Video shares also carry the intent's clip items
    Video {
        uri: Option<String>,
        text: Option<String>,
        clip_data: Vec<ClipItem>,
    },
    Image {
        uri: Option<String>,
        text: Option<String>,
    },
    Multiple {
        uris: Vec<String>,
    },
    /// Single share with a type we don't branch on
    Other,
}

/// The record delivered to the web layer.
///
/// Serializes to a flat object; keys only appear when their source data was present.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareData {
    pub action: String,
    pub mime_type: String,
    pub kind: ShareKind,
    pub all_extras: BTreeMap<String, String>,
}

impl Serialize for ShareData {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("action", &self.action)?;
        map.serialize_entry("type", &self.mime_type)?;

        match &self.kind {
            ShareKind::Text { text, subject } => {
                serialize_opt(&mut map, "text", text)?;
                serialize_opt(&mut map, "subject", subject)?;
            }
            ShareKind::Video {
                uri,
                text,
                clip_data,
            } => {
                map.serialize_entry("mediaType", "video")?;
                serialize_opt(&mut map, "mediaUri", uri)?;
                serialize_opt(&mut map, "text", text)?;
                if !clip_data.is_empty() {
                    map.serialize_entry("clipData", clip_data)?;
                }
            }
            ShareKind::Image { uri, text } => {
                map.serialize_entry("mediaType", "image")?;
                serialize_opt(&mut map, "mediaUri", uri)?;
                serialize_opt(&mut map, "text", text)?;
            }
            ShareKind::Multiple { uris } => {
                if !uris.is_empty() {
                    map.serialize_entry("mediaUris", uris)?;
                }
                map.serialize_entry("isMultiple", &true)?;
            }
            ShareKind::Other => {}
        }

        if !self.all_extras.is_empty() {
            map.serialize_entry("allExtras", &self.all_extras)?;
        }
        map.end()
    }
}

fn serialize_opt<M: SerializeMap>(
    map: &mut M,
    key: &str,
    value: &Option<String>,
) -> std::result::Result<(), M::Error> {
    match value {
        Some(value) => map.serialize_entry(key, value),
        None => Ok(()),
    }
}

/// A record that has been extracted but possibly not yet picked up by the frontend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingShare {
    pub share: ShareData,
    /// Capture time, milliseconds since epoch
    pub timestamp: i64,
}

/// Response of the `get_pending_share` command.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingShareResponse {
    pub share: Option<ShareData>,
    pub timestamp: Option<i64>,
    pub has_pending: bool,
}

impl From<Option<PendingShare>> for PendingShareResponse {
    fn from(pending: Option<PendingShare>) -> Self {
        match pending {
            Some(pending) => Self {
                share: Some(pending.share),
                timestamp: Some(pending.timestamp),
                has_pending: true,
            },
            None => Self::default(),
        }
    }
}
