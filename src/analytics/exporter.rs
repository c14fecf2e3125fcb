use super::*;
use std::sync::Arc;
use std::time::Duration;

/// Destination for analytics events.
#[async_trait::async_trait]
pub trait Exporter: Send + Sync {
    async fn export(&self, event: &Event) -> anyhow::Result<()>;
}

/// Writes each event as one JSON line to the `analytics` log target.
#[derive(Debug, Clone, Copy, Default)]
pub struct Journal;

#[async_trait::async_trait]
impl Exporter for Journal {
    async fn export(&self, event: &Event) -> anyhow::Result<()> {
        log::info!(target: "analytics", "{}", serde_json::to_string(event)?);
        Ok(())
    }
}

/// Export `event`, retrying once after `delay`. Returns whether it landed.
pub async fn forward(exporter: &dyn Exporter, event: Event, delay: Duration) -> bool {
    match exporter.export(&event).await {
        Ok(()) => true,
        Err(e) => {
            log::warn!("analytics export failed, retrying in {:?}: {}", delay, e);
            tokio::time::sleep(delay).await;
            exporter
                .export(&event)
                .await
                .inspect(|_| log::debug!("analytics retry succeeded"))
                .inspect_err(|e| log::error!("analytics export failed again: {}", e))
                .is_ok()
        }
    }
}

/// Forward `event` in the background; the caller never waits on export.
pub fn dispatch(exporter: Arc<dyn Exporter>, event: Event) {
    tokio::spawn(async move {
        forward(exporter.as_ref(), event, crate::ANALYTICS_RETRY_DELAY).await;
    });
}
