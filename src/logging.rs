use std::cmp::Ordering;

use crate::settings::SiteSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

/// Builds the structured payload for one log line, or `None` when `level` is
/// below the configured threshold.
pub fn format_event(
    settings: &SiteSettings,
    level: LogLevel,
    event: &str,
    fields: serde_json::Value,
) -> Option<serde_json::Value> {
    if level < settings.log_level {
        return None;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_millis())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Some(serde_json::Value::Object(payload))
}

pub fn log_event(settings: &SiteSettings, level: LogLevel, event: &str, fields: serde_json::Value) {
    if let Some(payload) = format_event(settings, level, event, fields) {
        emit(&payload.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn debug_events_are_dropped_at_info_threshold() {
        let settings = SiteSettings::default();

        let payload = format_event(&settings, LogLevel::Debug, "carousel_advanced", json!({}));
        assert!(payload.is_none());
    }

    #[test]
    fn payload_carries_level_event_and_extra_fields() {
        let settings = SiteSettings {
            log_level: LogLevel::Debug,
            ..SiteSettings::default()
        };

        let payload = format_event(
            &settings,
            LogLevel::Info,
            "particles_seeded",
            json!({ "count": 42 }),
        )
        .expect("info passes a debug threshold");

        assert_eq!(payload["level"], "info");
        assert_eq!(payload["event"], "particles_seeded");
        assert_eq!(payload["count"], 42);
        assert!(payload["ts"].is_u64());
    }

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(LogLevel::from_str(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_str("info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::from_str("trace"), None);
    }
}
