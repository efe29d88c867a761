//! Document Sink Module
//!
//! The downstream side of the pipeline: a document store that accepts one sanitized
//! record at a time.
//!
//! ## Submodules
//! - **`mongo`**: Production sink writing into a MongoDB collection.
//! - **`memory`**: In-process sink that records inserts, used for tests and local runs.
//! - **`types`**: `InsertAck` and `SinkError`.

pub mod memory;
pub mod mongo;
pub mod types;

pub use memory::MemorySink;
pub use mongo::{MongoSettings, MongoSink};
pub use types::{InsertAck, SinkError};

use crate::sanitizer::SanitizedRecord;
use async_trait::async_trait;

/// A store that durably accepts single records.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    async fn insert_one(&self, record: SanitizedRecord) -> Result<InsertAck, SinkError>;
}
