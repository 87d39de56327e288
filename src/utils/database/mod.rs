mod memory;
mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PostgresDocumentStore;

use async_trait::async_trait;
use serde_json::{Map, Value};

pub type Document = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Document {collection}/{id} already exists")]
    AlreadyExists { collection: String, id: String },
    #[error("No document to update: {collection}/{id}")]
    NotFound { collection: String, id: String },
    #[error("Cannot update {collection}/{id} with an empty set of fields")]
    EmptyUpdate { collection: String, id: String },
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Schema-less documents grouped into named collections.
///
/// Every operation touches a single document (or scans a single collection), and each write is
/// atomic on its own. Nothing spans documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents of a collection, ordered by id.
    async fn list(&self, collection: &str) -> Result<Vec<(String, Document)>, Error>;

    /// A single document, or `None` when the id is unknown.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, Error>;

    /// Writes `data` under `id` only if no document holds that id yet.
    async fn create(&self, collection: &str, id: &str, data: Document) -> Result<(), Error>;

    /// Writes `data` under `id`, replacing whatever was there.
    async fn set(&self, collection: &str, id: &str, data: Document) -> Result<(), Error>;

    /// Stores `data` under a freshly generated id and returns that id.
    async fn add(&self, collection: &str, data: Document) -> Result<String, Error>;

    /// Shallow-merges `fields` into an existing document. Fails with [`Error::EmptyUpdate`] when
    /// `fields` is empty and with [`Error::NotFound`] when there is nothing to update.
    async fn update(&self, collection: &str, id: &str, fields: Document) -> Result<(), Error>;

    /// Removes a document. Removing a missing document succeeds.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), Error>;

    /// Documents whose top-level `field` is equal to `value`, ordered by id.
    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<(String, Document)>, Error>;

    async fn close(&self) {}
}

pub fn generate_id() -> String {
    ulid::Ulid::new().to_string()
}

/// Renders documents as `{<id>: <fields>}` objects, the listing shape clients expect.
pub fn keyed_by_id(documents: Vec<(String, Document)>) -> Vec<Value> {
    documents
        .into_iter()
        .map(|(id, fields)| {
            let mut keyed = Document::new();
            keyed.insert(id, Value::Object(fields));
            Value::Object(keyed)
        })
        .collect()
}
