use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors raised by the storage adapter.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying database call failed.
    #[error(transparent)]
    Database(DbErr),

    /// Write referenced a parent record that doesn't exist.
    ///
    /// Only raised by backends enforcing foreign keys.
    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    /// Document could not be converted to or from the backend's row format.
    #[error("Failed to convert {collection} document: {source}")]
    Codec {
        /// Collection the document belongs to
        collection: &'static str,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Stored or supplied document is not a JSON object.
    #[error("Document in {collection} is not a JSON object")]
    NotAnObject {
        /// Collection the document belongs to
        collection: &'static str,
    },

    /// Inserted document has no string `id` field.
    #[error("Document inserted into {collection} has no string id")]
    MissingId {
        /// Collection the document belongs to
        collection: &'static str,
    },

    /// Filter names a field the backend cannot query on.
    #[error("Cannot filter {collection} on unknown field '{field}'")]
    UnknownField {
        /// Collection being queried
        collection: &'static str,
        /// Offending field name
        field: String,
    },

    /// Filter value type is not supported by the backend.
    #[error("Cannot filter {collection}.{field} on a {kind} value")]
    UnsupportedFilterValue {
        /// Collection being queried
        collection: &'static str,
        /// Field being filtered
        field: String,
        /// JSON type of the rejected value
        kind: &'static str,
    },
}

impl From<DbErr> for StorageError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                StorageError::ForeignKeyViolation(detail)
            }
            _ => StorageError::Database(err),
        }
    }
}
