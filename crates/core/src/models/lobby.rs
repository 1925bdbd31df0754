//! Lobby-games models for the "New" badge generator

use serde::Deserialize;

/// `data` payload of the LobbyGames query
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyGamesData {
    #[serde(default = "Vec::new")]
    pub lobby_games: Vec<LobbyGame>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyGame {
    pub game_id: String,
}
