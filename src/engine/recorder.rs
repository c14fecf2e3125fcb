use super::*;
use crate::game::Move;
use crate::game::Round;
use crate::game::Sequence;
use crate::game::Side;
use crate::history::HistoryStore;
use std::sync::Arc;
use std::time::SystemTime;

/// Raw description of a finished round, as reported by a client.
///
/// Moves and histories are whitespace-separated move names; histories
/// hold only moves from before this round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exchange {
    pub player: String,
    pub opponent: String,
    pub player_history: String,
    pub opponent_history: String,
    pub session: String,
}

/// Validates finished rounds and appends them to history.
pub struct Recorder {
    store: Arc<dyn HistoryStore>,
    tuning: Tuning,
}

impl Recorder {
    pub fn new(store: Arc<dyn HistoryStore>, tuning: Tuning) -> Self {
        Self { store, tuning }
    }

    /// Build the round for `exchange` and append it.
    ///
    /// Each current move must compress to exactly one move, so `"rock rock"`
    /// is rejected like an empty or unrecognized move with `InvalidMove`.
    /// Nothing is appended unless both current moves are valid. On
    /// [`Error::StoreWriteFailure`] the round must be treated as lost.
    pub async fn record(&self, exchange: &Exchange) -> Result<Round, Error> {
        let round = self.observe(exchange)?;
        tokio::time::timeout(self.tuning.timeout, self.store.append(&round))
            .await
            .map_err(|_| anyhow::anyhow!("timed out after {:?}", self.tuning.timeout))
            .and_then(|result| result)
            .map_err(Error::StoreWriteFailure)
            .inspect_err(|e| log::error!("{}", e))?;
        log::debug!(
            "recorded {} vs {} after {}/{}",
            round.player_move(),
            round.opponent_move(),
            round.player_context(),
            round.opponent_context()
        );
        Ok(round)
    }

    /// Derive every field of the round without touching the store.
    pub fn observe(&self, exchange: &Exchange) -> Result<Round, Error> {
        let player = Self::current(&exchange.player, Side::Player)?;
        let opponent = Self::current(&exchange.opponent, Side::Opponent)?;
        let player_history = Sequence::from(exchange.player_history.as_str());
        let opponent_history = Sequence::from(exchange.opponent_history.as_str());
        Ok(Round::new(
            player,
            opponent,
            player_history.suffix(self.tuning.context_length),
            opponent_history.suffix(self.tuning.context_length),
            player_history.suffix(self.tuning.key_length),
            opponent_history.suffix(self.tuning.key_length),
            SystemTime::now(),
            exchange.session.clone(),
        ))
    }

    /// Exactly one recognized move, or `InvalidMove`.
    fn current(raw: &str, side: Side) -> Result<Move, Error> {
        match Sequence::from(raw).moves() {
            [m] => Ok(*m),
            _ => Err(Error::InvalidMove(side, raw.to_string()))
                .inspect_err(|e| log::warn!("{}", e)),
        }
    }
}
