//! Storage adapter hiding the database backend from repositories.
//!
//! Every record is handled as a [`Document`], a JSON object keyed by field name with an
//! opaque string `id`. Repositories talk to the [`DocumentStore`] trait only; the backend is
//! chosen once at startup through [`StorageBackend`] and never inspected again.
//!
//! Two backends exist:
//! - [`RelationalStore`] maps collections onto the typed `school` & `page` tables. Page
//!   components are encoded into a JSON text column on write and decoded on read, and the
//!   school → page cascade is a foreign key.
//! - [`DocumentTableStore`] keeps every record as a native JSON body in the `document`
//!   table, nested component arrays included, without any foreign keys.

pub mod codec;
pub mod document_table;
pub mod relational;

#[cfg(test)]
mod test;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};
use std::{str::FromStr, sync::Arc};

pub use document_table::DocumentTableStore;
pub use relational::RelationalStore;

use crate::server::error::storage::StorageError;

/// A stored record: JSON object with at least a string `id` field.
pub type Document = Map<String, Value>;

/// Named group of documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Schools,
    Pages,
}

impl Collection {
    /// Collection name as used in logs & the document table.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Schools => "schools",
            Collection::Pages => "pages",
        }
    }
}

/// Conjunction of field equality terms.
///
/// An empty filter matches every document of the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    terms: Vec<(String, Value)>,
}

impl Filter {
    /// Filter matching every document.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter matching the document with the provided id.
    pub fn by_id(id: impl Into<String>) -> Self {
        let id: String = id.into();
        Self::all().eq("id", id)
    }

    /// Adds an equality term on `field`.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.terms.push((field.into(), value.into()));
        self
    }

    pub fn terms(&self) -> &[(String, Value)] {
        &self.terms
    }

    /// The id this filter pins, if it has a string `id` term.
    pub fn id(&self) -> Option<&str> {
        self.terms
            .iter()
            .find(|(field, _)| field == "id")
            .and_then(|(_, value)| value.as_str())
    }

    /// Checks whether every term equals the matching field of `document`.
    ///
    /// Missing fields compare as JSON `null`.
    pub fn matches(&self, document: &Document) -> bool {
        self.terms
            .iter()
            .all(|(field, value)| document.get(field).unwrap_or(&Value::Null) == value)
    }
}

/// Shallow merges `patch` into `document`, field by field.
///
/// The `id` field is immutable and skipped if present in the patch.
pub fn merge(document: &mut Document, patch: Document) {
    for (field, value) in patch {
        if field == "id" {
            continue;
        }
        document.insert(field, value);
    }
}

/// Backend-agnostic persistence operations keyed by collection.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Stores a new document and returns it as persisted.
    async fn insert(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<Document, StorageError>;

    /// Returns up to `limit` documents matching `filter`.
    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
        limit: u64,
    ) -> Result<Vec<Document>, StorageError>;

    /// Returns the first document matching `filter`, if any.
    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Document>, StorageError> {
        Ok(self.find(collection, filter, 1).await?.into_iter().next())
    }

    /// Merges `patch` into the first document matching `filter`.
    ///
    /// # Returns
    /// - `Ok(Some(Document))` - The document after the patch was applied
    /// - `Ok(None)` - No document matched
    async fn update(
        &self,
        collection: Collection,
        filter: &Filter,
        patch: Document,
    ) -> Result<Option<Document>, StorageError>;

    /// Removes every document matching `filter` and returns how many were removed.
    async fn delete(&self, collection: Collection, filter: &Filter) -> Result<u64, StorageError>;
}

/// Which backend the storage adapter runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Relational,
    Document,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "relational" => Ok(StorageBackend::Relational),
            "document" => Ok(StorageBackend::Document),
            other => Err(format!(
                "unknown storage backend '{}', expected 'relational' or 'document'",
                other
            )),
        }
    }
}

impl StorageBackend {
    /// Builds the store for this backend on top of the shared connection pool.
    pub fn connect(self, db: DatabaseConnection) -> Arc<dyn DocumentStore> {
        match self {
            StorageBackend::Relational => Arc::new(RelationalStore::new(db)),
            StorageBackend::Document => Arc::new(DocumentTableStore::new(db)),
        }
    }
}
