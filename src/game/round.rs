use super::*;
use std::time::SystemTime;

/// Persistent record of one completed exchange.
///
/// Contexts hold each side's moves from *before* this round: the longer
/// audit context for analytics, and the shorter key the history store
/// matches on. Written once by the recorder and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    player_move: Move,
    opponent_move: Move,
    player_context: Sequence,
    opponent_context: Sequence,
    player_key: Sequence,
    opponent_key: Sequence,
    created_at: SystemTime,
    session: String,
}

impl Round {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        player_move: Move,
        opponent_move: Move,
        player_context: Sequence,
        opponent_context: Sequence,
        player_key: Sequence,
        opponent_key: Sequence,
        created_at: SystemTime,
        session: String,
    ) -> Self {
        Self {
            player_move,
            opponent_move,
            player_context,
            opponent_context,
            player_key,
            opponent_key,
            created_at,
            session,
        }
    }
    pub fn player_move(&self) -> Move {
        self.player_move
    }
    pub fn opponent_move(&self) -> Move {
        self.opponent_move
    }
    pub fn player_context(&self) -> &Sequence {
        &self.player_context
    }
    pub fn opponent_context(&self) -> &Sequence {
        &self.opponent_context
    }
    pub fn player_key(&self) -> &Sequence {
        &self.player_key
    }
    pub fn opponent_key(&self) -> &Sequence {
        &self.opponent_key
    }
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }
    pub fn session(&self) -> &str {
        &self.session
    }
    /// Whether this round was played in the given pair of lookup keys.
    pub fn matches(&self, player: &Sequence, opponent: &Sequence) -> bool {
        self.player_key == *player && self.opponent_key == *opponent
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use crate::save::*;

    impl Schema for Round {
        fn name() -> &'static str {
            ROUNDS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                ROUNDS,
                " (
                    id                BIGSERIAL PRIMARY KEY,
                    player_move       TEXT NOT NULL,
                    opponent_move     TEXT NOT NULL,
                    player_context    TEXT NOT NULL,
                    opponent_context  TEXT NOT NULL,
                    player_key        TEXT NOT NULL,
                    opponent_key      TEXT NOT NULL,
                    created_at        TIMESTAMPTZ NOT NULL,
                    session           TEXT NOT NULL
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_rounds_keys ON ",
                ROUNDS,
                " (player_key, opponent_key, created_at DESC);"
            )
        }
    }
}
