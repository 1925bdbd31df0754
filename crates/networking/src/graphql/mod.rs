//! Ambet GraphQL client with cookie-based bearer authentication

use crate::cookies::BrowserCookies;
use ambet_core::{Envelope, Error, Result, SessionCredential};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Fixed GraphQL endpoint of the site
pub const API_URL: &str = "https://www.ambassadoribet.com/_internal/gql";
/// Tenant/brand identifier sent with every request
pub const BRAND_ID: &str = "ab";
/// Header carrying the brand identifier
const BRAND_HEADER: &str = "tm-bid";

/// GraphQL client for the Ambassadori widget API
///
/// Emulates the browser widgets: every authenticated request carries
/// the bearer token extracted from the `auth` cookie plus the fixed
/// brand header. One POST per invocation; no retry, no backoff.
pub struct AmbetClient {
    http: Client,
    cookies: BrowserCookies,
}

impl AmbetClient {
    /// Create a new client over a captured cookie string
    pub fn new(cookies: BrowserCookies) -> Self {
        Self {
            http: Client::new(),
            cookies,
        }
    }

    /// Access the underlying cookie snapshot
    pub fn cookies(&self) -> &BrowserCookies {
        &self.cookies
    }

    /// Current credential, re-read from the cookie string on each call.
    /// Fails with `Unauthenticated` when absent or malformed.
    pub fn credential(&self) -> Result<SessionCredential> {
        self.cookies
            .credential()
            .ok_or_else(|| Error::Unauthenticated("unable to retrieve authorization data".to_string()))
    }

    /// Convenience accessor for the cookie-declared user id
    pub fn user_id(&self) -> Result<String> {
        self.credential().map(|c| c.user_id)
    }

    /// Execute one authenticated GraphQL operation.
    ///
    /// Requiring a credential is a hard precondition checked before any
    /// network I/O. GraphQL-level errors are returned inside the
    /// envelope, not translated; callers inspect `envelope.errors`.
    #[instrument(skip(self, query, variables))]
    pub async fn execute(&self, query: &str, variables: serde_json::Value) -> Result<Envelope> {
        let credential = self.credential()?;

        debug!("Executing GraphQL operation against {}", API_URL);

        let body = serde_json::json!({ "query": query, "variables": variables });
        let response = self
            .http
            .post(API_URL)
            .header(BRAND_HEADER, BRAND_ID)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", credential.access_token),
            )
            .json(&body)
            .send()
            .await?;

        let response = response.error_for_status().map_err(|e| {
            error!("GraphQL request failed: {}", e);
            Error::NetworkError(e.to_string())
        })?;

        let envelope: Envelope = response.json().await.map_err(|e| {
            error!("Failed to parse GraphQL envelope: {}", e);
            Error::InvalidResponse(e.to_string())
        })?;

        if envelope.has_errors() {
            debug!("Envelope carries errors: {}", envelope.error_messages());
        }
        Ok(envelope)
    }

    /// Execute one unauthenticated operation (guest-visible queries
    /// such as the lobby-games listing).
    #[instrument(skip(self, query))]
    pub async fn execute_public(&self, query: &str) -> Result<Envelope> {
        debug!("Executing public GraphQL operation against {}", API_URL);

        let body = serde_json::json!({ "query": query });
        let response = self.http.post(API_URL).json(&body).send().await?;

        let response = response.error_for_status().map_err(|e| {
            error!("GraphQL request failed: {}", e);
            Error::NetworkError(e.to_string())
        })?;

        let envelope: Envelope = response.json().await.map_err(|e| {
            error!("Failed to parse GraphQL envelope: {}", e);
            Error::InvalidResponse(e.to_string())
        })?;
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_execute_fails_fast_without_credential() {
        // No auth cookie at all: execute must error before any network
        // call is attempted.
        let client = AmbetClient::new(BrowserCookies::empty());
        let result = client
            .execute("query Q { field }", serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(Error::Unauthenticated(_))));
    }

    #[tokio::test]
    async fn test_execute_fails_fast_with_malformed_credential() {
        let client = AmbetClient::new(BrowserCookies::new("auth=garbage"));
        let result = client
            .execute("query Q { field }", serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(Error::Unauthenticated(_))));
    }
}
