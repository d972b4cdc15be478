//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from stored
//! documents at the repository boundary and transformed to DTOs at the controller boundary.
//! Timestamps are `DateTime<Utc>` in the domain and RFC 3339 strings in storage.

pub mod page;
pub mod school;
pub mod timestamp;
pub mod user;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::server::{error::internal::InternalError, storage::Document};

/// Serializes a domain model into a storable document.
///
/// # Arguments
/// - `entity` - Name of the domain entity, used for error reporting
/// - `model` - Model to serialize
///
/// # Returns
/// - `Ok(Document)` - JSON object holding every field of the model
/// - `Err(InternalError::EncodeDocument)` - The model didn't serialize into an object
pub(crate) fn encode_document<T: Serialize>(
    entity: &'static str,
    model: &T,
) -> Result<Document, InternalError> {
    match serde_json::to_value(model) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(_) => Err(InternalError::EncodeDocument {
            entity,
            source: serde::ser::Error::custom("model did not serialize into an object"),
        }),
        Err(source) => Err(InternalError::EncodeDocument { entity, source }),
    }
}

/// Deserializes a stored document into a domain model.
pub(crate) fn decode_document<T: DeserializeOwned>(
    entity: &'static str,
    document: Document,
) -> Result<T, InternalError> {
    serde_json::from_value(Value::Object(document))
        .map_err(|source| InternalError::DecodeDocument { entity, source })
}
