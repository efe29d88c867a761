//! Configuration Module
//!
//! Reads the connection parameters for the queue and the document store, the queue name,
//! and the drain loop settings from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `REDIS_HOST` | required |
//! | `REDIS_PORT` | `6379` |
//! | `REDIS_USERNAME`, `REDIS_PASSWORD` | unset (empty means unset) |
//! | `REDIS_QUEUE_NAME` | required |
//! | `MONGOURI`, `MONGO_DB_NAME`, `MONGO_COLLECTION_NAME` | required |
//! | `DRAIN_IDLE_INTERVAL_MS` | `3000` |
//! | `DRAIN_NAN_NORMALIZATION` | `grammar` (`textual` for the regex behaviour) |

pub mod settings;

pub use settings::{ConfigError, Settings};

#[cfg(test)]
mod tests;
