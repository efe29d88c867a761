//! Queue Source Module
//!
//! The upstream side of the pipeline: a FIFO list store that producers append to and this
//! process drains with a non-blocking pop-oldest operation.
//!
//! ## Submodules
//! - **`redis`**: Production source backed by a Redis list (`LPOP`).
//! - **`memory`**: In-process list store with the same semantics, used for tests and local runs.

pub mod memory;
pub mod redis;

pub use memory::MemoryQueue;
pub use self::redis::{RedisQueue, RedisSettings};

use crate::BoxError;
use async_trait::async_trait;

/// A FIFO queue that can be drained one item at a time.
#[async_trait]
pub trait QueueSource: Send + Sync {
    /// Removes and returns the oldest item of `queue`, or `None` if the queue is empty.
    ///
    /// A popped item is gone from the queue; no other consumer can see it afterwards.
    async fn pop_oldest(&self, queue: &str) -> Result<Option<String>, QueueError>;
}

/// The pop operation itself failed (as opposed to the queue being empty).
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("failed to connect to queue backend: {source}")]
    Connect {
        #[source]
        source: BoxError,
    },
    #[error("failed to pop from queue '{queue}': {source}")]
    Pop {
        queue: String,
        #[source]
        source: BoxError,
    },
}

#[cfg(test)]
mod tests;
