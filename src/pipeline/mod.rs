//! Drain Pipeline Module
//!
//! The single consumer at the tail of the producer/consumer architecture. It repeatedly
//! pops a raw item from the queue source, sanitizes and parses it, and inserts the result
//! into the document sink.
//!
//! ## Loop Model
//! Each iteration is one pass through a single-state machine, `POLL -> {EMPTY, ITEM}`:
//! 1. **EMPTY**: The queue had nothing. Wait a fixed idle interval, then poll again.
//!    Emptiness is the normal state, so the wait never grows.
//! 2. **ITEM**: Parse and insert. A parse or insert failure is logged and the item is
//!    dropped; the next poll follows immediately.
//!
//! Only a failure of the pop itself leaves the loop; the caller decides what to do with it.
//! Items are processed strictly one at a time, in pop order. Delivery is at-least-once from
//! the producer's point of view: nothing is retried or re-queued here.
//!
//! ## Submodules
//! - **`drain`**: The `DrainLoop` itself.
//! - **`types`**: Loop configuration, per-iteration results and counters.
//! - **`error`**: Per-item and loop-level error types.

pub mod drain;
pub mod error;
pub mod types;

pub use drain::DrainLoop;
pub use error::{DrainError, ItemError};
pub use types::{DEFAULT_IDLE_INTERVAL, DrainConfig, DrainStats, Tick};
