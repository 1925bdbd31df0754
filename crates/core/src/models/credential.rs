//! Session credential parsed from the `auth` cookie

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// User id + bearer token pair extracted from the JSON-encoded `auth`
/// cookie. Parsed fresh on each use; no expiry tracking, so a stale or
/// missing cookie simply yields "unauthenticated" at the call site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCredential {
    pub user_id: String,
    pub access_token: String,
}

impl SessionCredential {
    /// Parse the decoded cookie value. A cookie that is present but
    /// not a valid credential is a `CookieError`, not a bad response;
    /// callers treat it the same as an absent cookie.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|err| Error::CookieError(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_auth_cookie_value() {
        let raw = r#"{"userId":"u-123","accessToken":"tok-abc","other":"ignored"}"#;
        let credential = SessionCredential::from_json(raw).unwrap();
        assert_eq!(credential.user_id, "u-123");
        assert_eq!(credential.access_token, "tok-abc");
    }

    #[test]
    fn test_malformed_auth_cookie_is_a_cookie_error() {
        assert!(matches!(
            SessionCredential::from_json("not json"),
            Err(Error::CookieError(_))
        ));
        assert!(matches!(
            SessionCredential::from_json(r#"{"userId":"u-123"}"#),
            Err(Error::CookieError(_))
        ));
    }
}
