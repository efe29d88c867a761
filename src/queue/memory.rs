//! In-Memory Queue Source
//!
//! A list store keyed by queue name, mirroring the Redis list semantics the pipeline
//! relies on: producers append at the back, the consumer pops from the front.

use super::{QueueError, QueueSource};

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::VecDeque;

#[derive(Default)]
pub struct MemoryQueue {
    /// Structure: `Queue name -> items, oldest first`.
    lists: DashMap<String, VecDeque<String>>,
}

impl MemoryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item to the back of `queue` (the producer side).
    pub fn push_back(&self, queue: &str, item: impl Into<String>) {
        self.lists
            .entry(queue.to_string())
            .or_default()
            .push_back(item.into());
    }

    pub fn len(&self, queue: &str) -> usize {
        self.lists.get(queue).map(|list| list.len()).unwrap_or(0)
    }

    pub fn is_empty(&self, queue: &str) -> bool {
        self.len(queue) == 0
    }
}

#[async_trait]
impl QueueSource for MemoryQueue {
    async fn pop_oldest(&self, queue: &str) -> Result<Option<String>, QueueError> {
        Ok(self
            .lists
            .get_mut(queue)
            .and_then(|mut list| list.pop_front()))
    }
}
