use super::*;
use crate::game::Round;
use anyhow::Context;
use std::sync::Arc;
use tokio_postgres::Client;

/// Connect using `DB_URL`, create missing tables and indices, return the client.
pub async fn db() -> anyhow::Result<Arc<Client>> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let ref url = std::env::var("DB_URL").context("DB_URL must be set")?;
    let (client, connection) = tokio_postgres::connect(url, tls)
        .await
        .context("database connection failed")?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await
        .context("set client_min_messages")?;
    log::info!("preparing table ({})", Round::name());
    client
        .batch_execute(Round::creates())
        .await
        .context("create rounds")?;
    client
        .batch_execute(Round::indices())
        .await
        .context("index rounds")?;
    Ok(Arc::new(client))
}
