//! Lobby-games listing for the "New" badge generator

use crate::AmbetClient;
use ambet_core::{LobbyGamesData, Result};
use tracing::debug;

/// Newest releases first; the badge only marks the freshest 20
const LOBBY_GAMES_QUERY: &str = r#"
    query LobbyGames {
      lobbyGames(
        brandId: "ab",
        gameFilters: {
          orderBy: [
            {
              direction: DESCENDING,
              field: releasedAt
            }
          ]
        },
        limit: 20
      ) {
        gameId
      }
    }
"#;

/// Fetch the ids of the newest lobby games. Guest-visible: no auth.
pub async fn fetch_new_game_ids(client: &AmbetClient) -> Result<Vec<String>> {
    let envelope = client.execute_public(LOBBY_GAMES_QUERY).await?;
    let data: LobbyGamesData = envelope.data_as()?;
    let ids: Vec<String> = data.lobby_games.into_iter().map(|g| g.game_id).collect();
    debug!("Fetched {} new game ids", ids.len());
    Ok(ids)
}
