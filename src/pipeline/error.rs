use crate::queue::QueueError;
use crate::sanitizer::ParseError;
use crate::sink::SinkError;

/// Failure confined to a single queue item. The loop logs it and moves on.
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),
    #[error("insert failed: {0}")]
    Insertion(#[from] SinkError),
}

impl ItemError {
    /// Short label used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ItemError::Parse(_) => "parse",
            ItemError::Insertion(_) => "insertion",
        }
    }
}

/// Failure that ends the loop and is handed back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum DrainError {
    #[error("queue acquisition failed: {0}")]
    Acquisition(#[from] QueueError),
}
