//! Cookie/auth reader
//!
//! Works on a raw `Cookie:`-header style string captured from the
//! browser. Credentials are re-parsed on every use; nothing is cached.

use ambet_core::SessionCredential;
use cookie::time::{Duration, OffsetDateTime};
use cookie::Cookie;
use tracing::warn;

/// The JSON-encoded `{userId, accessToken}` credential
pub const AUTH_COOKIE: &str = "auth";
/// Guest segment cookies, newest key last
pub const SEGMENT_COOKIES: [&str; 2] = ["guestUserSegments", "guestUserSegments.v2"];
/// Boolean consent flag
pub const CONSENT_COOKIE: &str = "cookieConsent";

/// Snapshot of the browser cookie string
#[derive(Debug, Clone)]
pub struct BrowserCookies {
    raw: String,
}

impl BrowserCookies {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn empty() -> Self {
        Self::new("")
    }

    /// Look up one cookie by name and percent-decode its value.
    /// Unparseable pairs in the string are skipped, not fatal.
    pub fn get(&self, name: &str) -> Option<String> {
        Cookie::split_parse_encoded(self.raw.as_str())
            .filter_map(|cookie| cookie.ok())
            .find(|cookie| cookie.name() == name)
            .map(|cookie| cookie.value().to_string())
    }

    /// Extract the session credential from the `auth` cookie.
    ///
    /// A missing cookie is not an error; it simply means the visitor
    /// is not logged in. A present but malformed cookie is logged and
    /// also treated as absent.
    pub fn credential(&self) -> Option<SessionCredential> {
        let raw = match self.get(AUTH_COOKIE) {
            Some(raw) => raw,
            None => {
                warn!("Auth cookie not found");
                return None;
            }
        };
        match SessionCredential::from_json(&raw) {
            Ok(credential) => Some(credential),
            Err(err) => {
                warn!("Error parsing auth cookie: {}", err);
                None
            }
        }
    }

    /// Guest user segments, trying the legacy key first and falling
    /// back to the `.v2` key when the first fails to parse.
    pub fn user_segments(&self) -> Option<Vec<String>> {
        for key in SEGMENT_COOKIES {
            let Some(value) = self.get(key) else { continue };
            match serde_json::from_str::<serde_json::Value>(&value) {
                Ok(serde_json::Value::Array(items)) => {
                    return Some(
                        items
                            .into_iter()
                            .filter_map(|v| v.as_str().map(str::to_string))
                            .collect(),
                    );
                }
                Ok(_) => {
                    // Present but not an array: do not fall through
                    warn!("Cookie {} does not contain a valid array", key);
                    return None;
                }
                Err(err) => {
                    warn!("Error parsing {} cookie: {}", key, err);
                    continue;
                }
            }
        }
        warn!("Guest user segments cookie not found");
        None
    }

    /// Whether the visitor has already accepted the consent banner
    pub fn has_consent(&self) -> bool {
        self.get(CONSENT_COOKIE).is_some()
    }
}

/// Render the consent-accepted cookie assignment, valid for `days`
pub fn consent_cookie(days: i64) -> String {
    let mut cookie = Cookie::new(CONSENT_COOKIE, "true");
    cookie.set_path("/");
    cookie.set_expires(OffsetDateTime::now_utc() + Duration::days(days));
    cookie.to_string()
}
