//! Fire-and-forget recorder over a store
//!
//! Handlers report an [`AuditEntry`] after their primary mutation has
//! committed; the recorder timestamps it and queues it for a dedicated
//! worker task. The worker owns the only path to the store, so an append
//! failure can be logged and dropped without ever touching the primary
//! response. `flush` exists for tests and graceful shutdown.

use crate::record::{AuditEntry, AuditRecord};
use crate::store::AuditStore;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::{mpsc, oneshot};

enum Message {
    Record(AuditRecord),
    Flush(oneshot::Sender<()>),
}

/// Queues audit entries for best-effort persistence
#[derive(Clone)]
pub struct AuditRecorder {
    tx: mpsc::UnboundedSender<Message>,
}

impl AuditRecorder {
    /// Spawn the worker task over a store
    pub fn spawn(store: Arc<dyn AuditStore>) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            while let Some(message) = rx.recv().await {
                match message {
                    Message::Record(record) => {
                        if let Err(error) = store.append(record).await {
                            tracing::warn!(%error, "audit append failed, record dropped");
                        }
                    }
                    Message::Flush(ack) => {
                        let _ = ack.send(());
                    }
                }
            }
        });
        Self { tx }
    }

    /// Queue an entry, stamped with the current time
    ///
    /// Never fails from the caller's point of view; a closed worker is
    /// logged and ignored.
    pub fn record(&self, entry: AuditEntry) {
        self.record_at(entry, OffsetDateTime::now_utc());
    }

    /// Queue an entry with an explicit timestamp
    pub fn record_at(&self, entry: AuditEntry, created_at: OffsetDateTime) {
        let record = AuditRecord::from_entry(entry, created_at);
        if self.tx.send(Message::Record(record)).is_err() {
            tracing::warn!("audit worker gone, record dropped");
        }
    }

    /// Wait until every previously queued entry has been attempted
    pub async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.tx.send(Message::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.await;
        }
    }
}
