//! Session history models for the sessionConnection query

use super::boxes::Connection;
use chrono::DateTime;
use serde::Deserialize;

/// `data` payload of the SessionConnection query
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConnectionData {
    pub session_connection: Connection<SessionRecord>,
}

/// One login session as reported by the API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub browser: Option<String>,
    pub created_at: String,
}

impl SessionRecord {
    /// Human-readable timestamp; falls back to the raw value when the
    /// server sends something that is not RFC 3339.
    pub fn display_time(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            Err(_) => self.created_at.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_time_formats_rfc3339() {
        let record = SessionRecord {
            ip: Some("10.0.0.1".to_string()),
            os: Some("Windows".to_string()),
            browser: Some("Chrome".to_string()),
            created_at: "2025-06-01T12:30:45+04:00".to_string(),
        };
        assert_eq!(record.display_time(), "2025-06-01 12:30:45");
    }

    #[test]
    fn test_display_time_falls_back_on_raw_value() {
        let record = SessionRecord {
            ip: None,
            os: None,
            browser: None,
            created_at: "yesterday".to_string(),
        };
        assert_eq!(record.display_time(), "yesterday");
    }
}
