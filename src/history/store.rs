use crate::game::Round;
use crate::game::Sequence;

/// Append-only log of rounds, queried by lookup keys.
///
/// Implementations may be remote and slow; callers bound every call
/// with their own timeout. Appended rounds need only become visible
/// to later queries eventually.
#[async_trait::async_trait]
pub trait HistoryStore: Send + Sync {
    /// Rounds whose player and opponent keys equal the given keys,
    /// at most `limit` of them, most recent preferred. Order unspecified.
    async fn query(
        &self,
        player: &Sequence,
        opponent: &Sequence,
        limit: usize,
    ) -> anyhow::Result<Vec<Round>>;
    /// Durably append one round.
    async fn append(&self, round: &Round) -> anyhow::Result<()>;
}
