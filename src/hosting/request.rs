use crate::analytics::Winner;
use serde::Deserialize;

/// Query of `/play`. Histories are `+`-joined move names, most recent last.
#[derive(Debug, Default, Deserialize)]
pub struct PlayRequest {
    #[serde(rename = "pu", default)]
    pub player_history: String,
    #[serde(rename = "ps", default)]
    pub opponent_history: String,
}

/// Query of `/record`.
#[derive(Debug, Default, Deserialize)]
pub struct RecordRequest {
    #[serde(rename = "u", default)]
    pub player: String,
    #[serde(rename = "s", default)]
    pub opponent: String,
    #[serde(rename = "pu", default)]
    pub player_history: String,
    #[serde(rename = "ps", default)]
    pub opponent_history: String,
    pub id: Option<String>,
}

/// Query of `/game`.
#[derive(Debug, Default, Deserialize)]
pub struct SessionRequest {
    pub id: Option<String>,
}

/// Body of `/game`. Tallies are passed through to analytics verbatim.
#[derive(Debug, Deserialize)]
pub struct GameRequest {
    pub winner: Winner,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub server: String,
}
