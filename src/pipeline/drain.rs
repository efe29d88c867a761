//! Drain Loop Implementation
//!
//! Owns the queue and sink handles for the lifetime of the loop and drives them one item
//! at a time.
//!
//! ## Responsibilities
//! - **Polling**: popping the oldest item, waiting a fixed interval when there is none.
//! - **Processing**: parse -> sanitize -> insert, with failures contained to the item.
//! - **Cancellation**: checked between iterations; an idle wait ends as soon as the token fires.

use super::error::{DrainError, ItemError};
use super::types::{DrainConfig, DrainStats, Tick};
use crate::queue::QueueSource;
use crate::sanitizer::parse_record;
use crate::sink::{DocumentSink, InsertAck};

use mongodb::bson::Bson;
use tokio_util::sync::CancellationToken;

/// Longest slice of a raw item echoed into failure logs.
const RAW_PREVIEW_CHARS: usize = 256;

pub struct DrainLoop<Q, S> {
    queue: Q,
    sink: S,
    /// Pop target on the queue source.
    queue_name: String,
    config: DrainConfig,
    stats: DrainStats,
}

impl<Q, S> DrainLoop<Q, S>
where
    Q: QueueSource,
    S: DocumentSink,
{
    pub fn new(queue: Q, sink: S, queue_name: impl Into<String>, config: DrainConfig) -> Self {
        Self {
            queue,
            sink,
            queue_name: queue_name.into(),
            config,
            stats: DrainStats::default(),
        }
    }

    /// Runs iterations until `ct` is cancelled and returns the final counters.
    ///
    /// # Errors
    /// Returns `DrainError::Acquisition` as soon as a pop fails. Per-item failures never
    /// end the loop.
    pub async fn run(&mut self, ct: CancellationToken) -> Result<DrainStats, DrainError> {
        tracing::info!(
            "Draining queue '{}' (idle interval: {:?}, normalization: {:?})",
            self.queue_name,
            self.config.idle_interval,
            self.config.normalization
        );

        while !ct.is_cancelled() {
            if let Err(err) = self.tick(&ct).await {
                tracing::error!("Stopping drain loop: {}", err);
                return Err(err);
            }
        }

        tracing::info!(
            "Drain loop cancelled after {} polls ({} inserted, {} parse failures, {} insert failures)",
            self.stats.polls,
            self.stats.inserted,
            self.stats.parse_failures,
            self.stats.insert_failures
        );

        Ok(self.stats.clone())
    }

    /// Performs exactly one `POLL -> {EMPTY, ITEM}` iteration.
    pub async fn tick(&mut self, ct: &CancellationToken) -> Result<Tick, DrainError> {
        let item = self.queue.pop_oldest(&self.queue_name).await?;
        self.stats.polls += 1;

        let Some(raw) = item else {
            self.stats.idle_polls += 1;
            tracing::debug!("Queue empty. Waiting {:?}...", self.config.idle_interval);

            tokio::select! {
                _ = ct.cancelled() => {}
                _ = tokio::time::sleep(self.config.idle_interval) => {}
            }

            return Ok(Tick::Idle);
        };

        match self.process(&raw).await {
            Ok((id, ack)) => {
                self.stats.inserted += 1;
                match &id {
                    Some(id) => tracing::info!("Inserted: {} (_id: {})", id, ack.inserted_id),
                    None => {
                        tracing::info!("Inserted record without id (_id: {})", ack.inserted_id)
                    }
                }
                Ok(Tick::Inserted { id, ack })
            }
            Err(err) => {
                match &err {
                    ItemError::Parse(_) => self.stats.parse_failures += 1,
                    ItemError::Insertion(_) => self.stats.insert_failures += 1,
                }
                tracing::error!(
                    "Dropping queue item ({} failure): {} | raw: {}",
                    err.kind(),
                    err,
                    preview(&raw)
                );
                Ok(Tick::Skipped(err))
            }
        }
    }

    async fn process(&self, raw: &str) -> Result<(Option<Bson>, InsertAck), ItemError> {
        let record = parse_record(raw, self.config.normalization)?;
        let id = record.id().cloned();
        let ack = self.sink.insert_one(record).await?;
        Ok((id, ack))
    }

    pub fn stats(&self) -> &DrainStats {
        &self.stats
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Gives the handles back so the caller can release them.
    pub fn into_parts(self) -> (Q, S) {
        (self.queue, self.sink)
    }
}

pub(crate) fn preview(raw: &str) -> String {
    let mut chars = raw.chars();
    let head: String = chars.by_ref().take(RAW_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
