//! JavaScript snippets evaluated in the webview.

use crate::config::Config;

/// Escape `input` for embedding inside a single-quoted JS string literal.
///
/// Reversible: evaluating `'<escaped>'` yields `input` unchanged.
pub fn escape_js_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Script storing the record and its timestamp in localStorage and firing the
/// share event with the parsed record as `detail`.
pub fn delivery_script(config: &Config, record_json: &str, timestamp_ms: i64) -> String {
    format!(
        "(function() {{\
 try {{\
 var data = '{data}';\
 localStorage.setItem('{storage_key}', data);\
 localStorage.setItem('{timestamp_key}', '{timestamp}');\
 window.dispatchEvent(new CustomEvent('{event}', {{ detail: JSON.parse(data) }}));\
 }} catch (e) {{\
 console.error('sharebridge: failed to deliver share', e);\
 }}\
 }})();",
        data = escape_js_string(record_json),
        storage_key = escape_js_string(&config.storage_key),
        timestamp_key = escape_js_string(&config.timestamp_key),
        timestamp = timestamp_ms,
        event = escape_js_string(&config.event_name),
    )
}

/// Script removing both storage keys.
pub fn clear_script(config: &Config) -> String {
    format!(
        "(function() {{\
 try {{\
 localStorage.removeItem('{storage_key}');\
 localStorage.removeItem('{timestamp_key}');\
 }} catch (e) {{\
 console.error('sharebridge: failed to clear share', e);\
 }}\
 }})();",
        storage_key = escape_js_string(&config.storage_key),
        timestamp_key = escape_js_string(&config.timestamp_key),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_share;
    use crate::models::{ShareIntent, ACTION_SEND};

    /// Decodes the body of a single-quoted JS literal produced by `escape_js_string`.
    fn unescape_js_string(input: &str) -> String {
        let mut out = String::new();
        let mut chars = input.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next().unwrap() {
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                'u' => {
                    let hex: String = chars.by_ref().take(4).collect();
                    let code = u32::from_str_radix(&hex, 16).unwrap();
                    out.push(char::from_u32(code).unwrap());
                }
                other => out.push(other),
            }
        }
        out
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape_js_string("it's"), "it\\'s");
        assert_eq!(escape_js_string("a\\b"), "a\\\\b");
        assert_eq!(escape_js_string("line\nnext"), "line\\nnext");
        assert_eq!(escape_js_string("\u{0007}"), "\\u0007");
        assert_eq!(escape_js_string("\u{2028}"), "\\u2028");
        assert_eq!(escape_js_string("plain çorba"), "plain çorba");
    }

    #[test]
    fn test_escaped_record_decodes_to_original_field() {
        let original = "Mom's \"best\" soup\\n\nstep 1\r\n\tstir\u{0001}";
        let intent = ShareIntent {
            action: Some(ACTION_SEND.to_string()),
            mime_type: Some("text/plain".to_string()),
            text: Some(original.to_string()),
            ..Default::default()
        };
        let data = extract_share(&intent, true).unwrap();
        let json = serde_json::to_string(&data).unwrap();

        let escaped = escape_js_string(&json);
        assert!(!escaped.contains('\n'));
        assert!(!escaped.replace("\\\\", "").replace("\\'", "").contains('\''));

        let decoded = unescape_js_string(&escaped);
        assert_eq!(decoded, json);

        let value: serde_json::Value = serde_json::from_str(&decoded).unwrap();
        assert_eq!(value["text"].as_str().unwrap().as_bytes(), original.as_bytes());
    }

    #[test]
    fn test_delivery_script_uses_configured_names() {
        let config = Config {
            storage_key: "sharedRecipe".to_string(),
            event_name: "recipeShared".to_string(),
            ..Config::default()
        };

        let script = delivery_script(&config, r#"{"action":"x"}"#, 1_700_000_000_000);

        assert!(script.contains("localStorage.setItem('sharedRecipe', data)"));
        assert!(script.contains("localStorage.setItem('pendingShareDataTimestamp', '1700000000000')"));
        assert!(script.contains("new CustomEvent('recipeShared'"));
        assert!(script.contains(r#"var data = '{\"action\":\"x\"}';"#));
        assert!(!script.contains('\n'));
    }

    #[test]
    fn test_clear_script_removes_both_keys() {
        let script = clear_script(&Config::default());
        assert!(script.contains("localStorage.removeItem('pendingShareData')"));
        assert!(script.contains("localStorage.removeItem('pendingShareDataTimestamp')"));
    }
}
