use super::*;
use crate::Arbitrary;
use crate::game::Move;
use crate::game::Round;
use crate::game::Sequence;
use crate::history::HistoryStore;
use std::sync::Arc;

/// Chooses the engine's next move from the player's habits.
///
/// Rounds played under the same pair of lookup keys are tallied by the
/// player's move; the engine answers with the counter to the most
/// frequent one. Store failures, timeouts, and cold starts all degrade
/// to a uniformly random move, so prediction never fails.
pub struct Predictor {
    store: Arc<dyn HistoryStore>,
    tuning: Tuning,
}

impl Predictor {
    pub fn new(store: Arc<dyn HistoryStore>, tuning: Tuning) -> Self {
        Self { store, tuning }
    }

    /// Next move given each side's recent moves. Longer sequences are
    /// cut down to the lookup key length first.
    pub async fn predict(&self, player: &Sequence, opponent: &Sequence) -> Move {
        let player = player.suffix(self.tuning.key_length);
        let opponent = opponent.suffix(self.tuning.key_length);
        match self.lookup(&player, &opponent).await {
            Err(e) => {
                log::error!("{}, providing random move", e);
                Move::random()
            }
            Ok(rounds) => {
                let tally = self.tally(&rounds);
                match tally.mode() {
                    None => {
                        log::info!("no rounds after {}/{}, providing random move", player, opponent);
                        Move::random()
                    }
                    Some(likely) => {
                        log::debug!("{} favors {}, answering {}", tally, likely, likely.counter());
                        likely.counter()
                    }
                }
            }
        }
    }

    async fn lookup(&self, player: &Sequence, opponent: &Sequence) -> Result<Vec<Round>, Error> {
        let limit = self.tuning.query_limit;
        tokio::time::timeout(self.tuning.timeout, self.store.query(player, opponent, limit))
            .await
            .map_err(|_| anyhow::anyhow!("timed out after {:?}", self.tuning.timeout))
            .and_then(|result| result)
            .map_err(Error::StoreQueryFailure)
    }

    fn tally(&self, rounds: &[Round]) -> Tally {
        rounds
            .iter()
            .take(self.tuning.query_limit)
            .map(Round::player_move)
            .collect()
    }
}
