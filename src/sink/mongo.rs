//! MongoDB-backed Document Sink

use super::types::{InsertAck, SinkError};
use super::DocumentSink;
use crate::sanitizer::SanitizedRecord;

use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection};

/// Location of the target collection.
#[derive(Clone)]
pub struct MongoSettings {
    /// Connection string; may embed credentials.
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl std::fmt::Debug for MongoSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoSettings")
            .field("uri", &"<redacted>")
            .field("database", &self.database)
            .field("collection", &self.collection)
            .finish()
    }
}

pub struct MongoSink {
    collection: Collection<Document>,
}

impl MongoSink {
    /// Connects to the server, pings the database and binds the collection.
    pub async fn connect(settings: &MongoSettings) -> Result<Self, SinkError> {
        let client = Client::with_uri_str(&settings.uri)
            .await
            .map_err(connect_error)?;

        let database = client.database(&settings.database);
        database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(connect_error)?;

        tracing::info!(
            "Connected to MongoDB (database: {}, collection: {})",
            settings.database,
            settings.collection
        );

        Ok(Self {
            collection: database.collection::<Document>(&settings.collection),
        })
    }
}

fn connect_error(err: mongodb::error::Error) -> SinkError {
    SinkError::Connect {
        source: Box::new(err),
    }
}

#[async_trait]
impl DocumentSink for MongoSink {
    async fn insert_one(&self, record: SanitizedRecord) -> Result<InsertAck, SinkError> {
        let document = record
            .into_document()
            .map_err(|value| SinkError::NotADocument {
                kind: value.element_type(),
            })?;

        let result = self
            .collection
            .insert_one(document, None)
            .await
            .map_err(|err| SinkError::Insert {
                source: Box::new(err),
            })?;

        Ok(InsertAck {
            inserted_id: result.inserted_id,
        })
    }
}
