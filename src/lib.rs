//! Queue Drain Ingestion Library
//!
//! This library crate defines the modules of the ingestion tail: a single consumer that
//! drains serialized records from a work queue and stores them in a document store.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`sanitizer`**: Turns a raw queue item into a `SanitizedRecord`. Normalizes `NaN`
//!   tokens, parses the JSON text and replaces every non-finite number with `null`.
//! - **`pipeline`**: The drain loop. Pops, parses and inserts one item per iteration,
//!   waits a fixed idle interval on an empty queue and isolates per-item failures.
//! - **`queue`**: The queue source interface with Redis and in-memory implementations.
//! - **`sink`**: The document sink interface with MongoDB and in-memory implementations.
//! - **`config`**: Environment-sourced connection and loop settings.

pub mod config;
pub mod pipeline;
pub mod queue;
pub mod sanitizer;
pub mod sink;

/// Boxed source error carried by the backend error types.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
