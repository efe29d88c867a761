//! In-Memory Document Sink
//!
//! Keeps every accepted record in insertion order. Like the MongoDB sink it only accepts
//! documents, and it can be switched into a rejecting state to simulate store failures.

use super::types::{InsertAck, SinkError};
use super::DocumentSink;
use crate::sanitizer::SanitizedRecord;

use async_trait::async_trait;
use mongodb::bson::Bson;
use mongodb::bson::oid::ObjectId;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<SanitizedRecord>>,
    /// Every call to `insert_one`, accepted or not.
    attempts: AtomicUsize,
    rejecting: AtomicBool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, every insert fails with `SinkError::Insert`.
    pub fn set_rejecting(&self, rejecting: bool) {
        self.rejecting.store(rejecting, Ordering::SeqCst);
    }

    pub async fn records(&self) -> Vec<SanitizedRecord> {
        self.records.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentSink for MemorySink {
    async fn insert_one(&self, record: SanitizedRecord) -> Result<InsertAck, SinkError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if self.rejecting.load(Ordering::SeqCst) {
            return Err(SinkError::Insert {
                source: "memory sink is rejecting writes".into(),
            });
        }

        let inserted_id = match record.as_bson() {
            Bson::Document(doc) => doc
                .get("_id")
                .cloned()
                .unwrap_or_else(|| Bson::ObjectId(ObjectId::new())),
            other => {
                return Err(SinkError::NotADocument {
                    kind: other.element_type(),
                });
            }
        };

        self.records.lock().await.push(record);

        Ok(InsertAck { inserted_id })
    }
}
