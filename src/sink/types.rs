use crate::BoxError;
use mongodb::bson::Bson;
use mongodb::bson::spec::ElementType;

/// Acknowledgement of a successful insert.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertAck {
    /// The store-side identifier (`_id`) of the new document.
    pub inserted_id: Bson,
}

/// The sink rejected or failed a write.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to connect to document store: {source}")]
    Connect {
        #[source]
        source: BoxError,
    },
    #[error("record is not a document (top-level {kind:?})")]
    NotADocument { kind: ElementType },
    #[error("insert rejected: {source}")]
    Insert {
        #[source]
        source: BoxError,
    },
}
