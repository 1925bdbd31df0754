//! Login-session history for the account widget

use crate::AmbetClient;
use ambet_core::{Result, SessionConnectionData, SessionRecord};
use tracing::debug;

const SESSION_QUERY: &str = r#"
    query SessionConnection($userId: ID) {
      sessionConnection(userId: $userId, last: 15) {
        edges {
          node {
            ip
            os
            browser
            createdAt
          }
        }
      }
    }
"#;

/// Fetch the last 15 sessions for the cookie-declared user
pub async fn fetch_recent_sessions(client: &AmbetClient) -> Result<Vec<SessionRecord>> {
    let user_id = client.user_id()?;
    let envelope = client
        .execute(SESSION_QUERY, serde_json::json!({ "userId": user_id }))
        .await?;
    let data: SessionConnectionData = envelope.data_as()?;
    let sessions = data.session_connection.into_nodes();
    debug!("Fetched {} sessions", sessions.len());
    Ok(sessions)
}
