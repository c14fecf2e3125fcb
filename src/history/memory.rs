use super::*;
use crate::game::Round;
use crate::game::Sequence;
use tokio::sync::RwLock;

/// In-process history store. Rounds live as long as the value does.
#[derive(Default)]
pub struct Memory {
    rounds: RwLock<Vec<Round>>,
}

impl Memory {
    pub async fn len(&self) -> usize {
        self.rounds.read().await.len()
    }
    pub async fn is_empty(&self) -> bool {
        self.rounds.read().await.is_empty()
    }
}

impl From<Vec<Round>> for Memory {
    fn from(rounds: Vec<Round>) -> Self {
        Self {
            rounds: RwLock::new(rounds),
        }
    }
}

#[async_trait::async_trait]
impl HistoryStore for Memory {
    async fn query(
        &self,
        player: &Sequence,
        opponent: &Sequence,
        limit: usize,
    ) -> anyhow::Result<Vec<Round>> {
        Ok(self
            .rounds
            .read()
            .await
            .iter()
            .rev()
            .filter(|round| round.matches(player, opponent))
            .take(limit)
            .cloned()
            .collect())
    }
    async fn append(&self, round: &Round) -> anyhow::Result<()> {
        self.rounds.write().await.push(round.clone());
        Ok(())
    }
}
