use crate::game::Move;
use crate::game::Round;
use serde::Deserialize;
use serde::Serialize;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// Who took a finished game, as reported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    User,
    Server,
    Deuce,
}

/// Request-level metadata attached to every event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Client {
    pub user_agent: String,
    pub address: String,
}

/// One recorded round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayEvent {
    pub session: String,
    pub time: u64,
    pub user: Move,
    pub server: Move,
    pub last_user: String,
    pub last_server: String,
    pub key_user: String,
    pub key_server: String,
    pub client: Client,
}

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEvent {
    pub session: String,
    pub time: u64,
    pub winner: Winner,
    pub user: String,
    pub server: String,
    pub client: Client,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Event {
    Play(PlayEvent),
    Game(GameEvent),
}

impl PlayEvent {
    pub fn new(round: &Round, client: Client) -> Self {
        Self {
            session: round.session().to_string(),
            time: millis(round.created_at()),
            user: round.player_move(),
            server: round.opponent_move(),
            last_user: round.player_context().to_string(),
            last_server: round.opponent_context().to_string(),
            key_user: round.player_key().to_string(),
            key_server: round.opponent_key().to_string(),
            client,
        }
    }
}

impl GameEvent {
    pub fn new(session: String, winner: Winner, user: String, server: String, client: Client) -> Self {
        Self {
            session,
            time: millis(SystemTime::now()),
            winner,
            user,
            server,
            client,
        }
    }
}

impl From<PlayEvent> for Event {
    fn from(event: PlayEvent) -> Self {
        Self::Play(event)
    }
}
impl From<GameEvent> for Event {
    fn from(event: GameEvent) -> Self {
        Self::Game(event)
    }
}

/// Milliseconds since the Unix epoch, zero for pre-epoch clocks.
fn millis(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Sequence;

    #[test]
    fn play_event_serializes_tagged_with_move_names() {
        let round = Round::new(
            Move::Scissors,
            Move::Rock,
            Sequence::from("rock paper scissor"),
            Sequence::from("paper paper rock"),
            Sequence::from("paper scissor"),
            Sequence::from("paper rock"),
            UNIX_EPOCH + std::time::Duration::from_millis(1500),
            String::from("abc"),
        );
        let json = serde_json::to_value(Event::from(PlayEvent::new(&round, Client::default())))
            .expect("serialize");
        assert_eq!(json["kind"], "play");
        assert_eq!(json["user"], "scissor");
        assert_eq!(json["server"], "rock");
        assert_eq!(json["last_user"], "rps");
        assert_eq!(json["key_server"], "pr");
        assert_eq!(json["time"], 1500);
    }

    #[test]
    fn winner_parses_lowercase() {
        let winner = serde_json::from_str::<Winner>("\"deuce\"").expect("deserialize");
        assert_eq!(winner, Winner::Deuce);
        assert!(serde_json::from_str::<Winner>("\"nobody\"").is_err());
    }
}
