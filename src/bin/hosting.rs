//! hosting Server Binary
//!
//! Serves the prediction and recording endpoints over HTTP.
//! History lives in PostgreSQL (`DB_URL`) unless `--memory` is given.

use clap::Parser;
use roshambo::engine::Tuning;
use roshambo::history::HistoryStore;
use roshambo::history::Memory;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(about = "Adaptive Rock-Paper-Scissors opponent")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    bind: String,
    /// Keep history in process memory instead of PostgreSQL.
    #[arg(long)]
    memory: bool,
    /// Moves per side in the lookup key.
    #[arg(long, default_value_t = roshambo::CONTEXT_KEY_LENGTH)]
    key_length: usize,
    /// Moves per side stored with each round.
    #[arg(long, default_value_t = roshambo::CONTEXT_AUDIT_LENGTH)]
    context_length: usize,
    /// Most recent matching rounds considered per prediction.
    #[arg(long, default_value_t = roshambo::HISTORY_QUERY_LIMIT)]
    limit: usize,
    /// Bound on each history store call, in milliseconds.
    #[arg(long, default_value_t = roshambo::HISTORY_STORE_TIMEOUT.as_millis() as u64)]
    timeout_ms: u64,
}

impl Args {
    fn tuning(&self) -> Tuning {
        Tuning {
            key_length: self.key_length,
            context_length: self.context_length,
            query_limit: self.limit,
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
    async fn store(&self) -> anyhow::Result<Arc<dyn HistoryStore>> {
        if self.memory {
            log::warn!("using in-memory history, rounds are lost on exit");
            return Ok(Arc::new(Memory::default()));
        }
        postgres().await
    }
}

#[cfg(feature = "database")]
async fn postgres() -> anyhow::Result<Arc<dyn HistoryStore>> {
    Ok(roshambo::save::db().await?)
}

#[cfg(not(feature = "database"))]
async fn postgres() -> anyhow::Result<Arc<dyn HistoryStore>> {
    anyhow::bail!("built without the database feature, pass --memory")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    roshambo::log()?;
    let args = Args::parse();
    let tuning = args.tuning();
    log::info!("{:?}", tuning);
    let store = args.store().await?;
    roshambo::hosting::Server::run(store, tuning, &args.bind).await?;
    Ok(())
}
