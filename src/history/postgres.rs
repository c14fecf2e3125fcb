use super::*;
use crate::game::Move;
use crate::game::Round;
use crate::game::Sequence;
use crate::save::*;
use const_format::concatcp;
use std::time::SystemTime;
use tokio_postgres::Client;
use tokio_postgres::Row;

#[rustfmt::skip]
#[async_trait::async_trait]
impl HistoryStore for Client {
    async fn query(
        &self,
        player: &Sequence,
        opponent: &Sequence,
        limit: usize,
    ) -> anyhow::Result<Vec<Round>> {
        const SQL: &str = concatcp!(
            "SELECT player_move, ",
                   "opponent_move, ",
                   "player_context, ",
                   "opponent_context, ",
                   "player_key, ",
                   "opponent_key, ",
                   "created_at, ",
                   "session ",
            "FROM   ", ROUNDS, " ",
            "WHERE  player_key   = $1 ",
            "AND    opponent_key = $2 ",
            "ORDER  BY created_at DESC ",
            "LIMIT  $3"
        );
        let limit = i64::try_from(limit)?;
        let rows = Client::query(
            self,
            SQL,
            &[&player.to_string(), &opponent.to_string(), &limit],
        )
        .await?;
        Ok(rows.iter().filter_map(hydrate).collect())
    }
    async fn append(&self, round: &Round) -> anyhow::Result<()> {
        const SQL: &str = concatcp!(
            "INSERT INTO ", ROUNDS, " (player_move, opponent_move, player_context, opponent_context, player_key, opponent_key, created_at, session) ",
            "VALUES                  ($1,          $2,            $3,             $4,               $5,         $6,           $7,         $8)"
        );
        self.execute(
            SQL,
            &[
                &round.player_move().code().to_string(),
                &round.opponent_move().code().to_string(),
                &round.player_context().to_string(),
                &round.opponent_context().to_string(),
                &round.player_key().to_string(),
                &round.opponent_key().to_string(),
                &round.created_at(),
                &round.session(),
            ],
        )
        .await
        .map(|_| ())
        .map_err(anyhow::Error::from)
    }
}

/// Rebuild a round from a row, skipping rows whose moves no longer parse.
fn hydrate(row: &Row) -> Option<Round> {
    let decode = |i: usize| {
        let code = row.get::<_, String>(i);
        Move::from_code(&code).or_else(|| {
            log::warn!("skipping stored round with move code {:?}", code);
            None
        })
    };
    Some(Round::new(
        decode(0)?,
        decode(1)?,
        Sequence::decode(row.get::<_, &str>(2)),
        Sequence::decode(row.get::<_, &str>(3)),
        Sequence::decode(row.get::<_, &str>(4)),
        Sequence::decode(row.get::<_, &str>(5)),
        row.get::<_, SystemTime>(6),
        row.get::<_, String>(7),
    ))
}
