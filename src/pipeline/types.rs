use crate::sanitizer::NormalizationMode;
use crate::sink::InsertAck;

use super::error::ItemError;
use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_IDLE_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrainConfig {
    /// Wait after an empty poll. Fixed, not exponential.
    pub idle_interval: Duration,
    pub normalization: NormalizationMode,
}

impl Default for DrainConfig {
    fn default() -> Self {
        Self {
            idle_interval: DEFAULT_IDLE_INTERVAL,
            normalization: NormalizationMode::default(),
        }
    }
}

/// Result of one loop iteration.
#[derive(Debug)]
pub enum Tick {
    /// The queue was empty and the idle interval was waited out (or cut short by cancellation).
    Idle,
    /// An item was parsed and stored.
    Inserted {
        /// The record's own `id` field, if it had one.
        id: Option<Bson>,
        ack: InsertAck,
    },
    /// An item was dropped because it could not be parsed or stored.
    Skipped(ItemError),
}

/// Counters kept across iterations, reported when the loop stops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrainStats {
    pub polls: u64,
    pub idle_polls: u64,
    pub inserted: u64,
    pub parse_failures: u64,
    pub insert_failures: u64,
}

impl DrainStats {
    /// Items popped from the queue, whatever their outcome.
    pub fn items(&self) -> u64 {
        self.polls - self.idle_polls
    }
}
