//! Row codecs for the relational backend.
//!
//! School rows map one to one onto documents. Page rows keep their component array as JSON
//! text in the `components` column, so encoding turns the array into a string and decoding
//! parses it back, leaving callers with structured components either way.

use sea_orm::ActiveValue;
use serde::Serialize;
use serde_json::Value;

use super::{Collection, Document};
use crate::server::error::storage::StorageError;

const COMPONENTS_FIELD: &str = "components";

fn to_document<T: Serialize>(collection: Collection, row: T) -> Result<Document, StorageError> {
    match serde_json::to_value(row) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(_) => Err(StorageError::NotAnObject {
            collection: collection.name(),
        }),
        Err(source) => Err(StorageError::Codec {
            collection: collection.name(),
            source,
        }),
    }
}

fn from_document<T: serde::de::DeserializeOwned>(
    collection: Collection,
    document: Document,
) -> Result<T, StorageError> {
    serde_json::from_value(Value::Object(document)).map_err(|source| StorageError::Codec {
        collection: collection.name(),
        source,
    })
}

pub fn school_to_document(row: entity::school::Model) -> Result<Document, StorageError> {
    to_document(Collection::Schools, row)
}

pub fn school_from_document(document: Document) -> Result<entity::school::Model, StorageError> {
    from_document(Collection::Schools, document)
}

/// Decodes a page row, parsing the JSON text component column into an array.
pub fn page_to_document(row: entity::page::Model) -> Result<Document, StorageError> {
    let mut document = to_document(Collection::Pages, row)?;

    if let Some(Value::String(encoded)) = document.remove(COMPONENTS_FIELD) {
        let components: Value =
            serde_json::from_str(&encoded).map_err(|source| StorageError::Codec {
                collection: Collection::Pages.name(),
                source,
            })?;
        document.insert(COMPONENTS_FIELD.to_string(), components);
    }

    Ok(document)
}

/// Encodes a page document into a row, serializing the component array to JSON text.
pub fn page_from_document(mut document: Document) -> Result<entity::page::Model, StorageError> {
    let encoded = match document.remove(COMPONENTS_FIELD) {
        None | Some(Value::Null) => "[]".to_string(),
        Some(Value::String(already_encoded)) => already_encoded,
        Some(components) => components.to_string(),
    };
    document.insert(COMPONENTS_FIELD.to_string(), Value::String(encoded));

    from_document(Collection::Pages, document)
}

pub fn school_active_model(row: entity::school::Model) -> entity::school::ActiveModel {
    entity::school::ActiveModel {
        id: ActiveValue::Set(row.id),
        name: ActiveValue::Set(row.name),
        slug: ActiveValue::Set(row.slug),
        logo_url: ActiveValue::Set(row.logo_url),
        primary_color: ActiveValue::Set(row.primary_color),
        secondary_color: ActiveValue::Set(row.secondary_color),
        theme_id: ActiveValue::Set(row.theme_id),
        created_at: ActiveValue::Set(row.created_at),
    }
}

pub fn page_active_model(row: entity::page::Model) -> entity::page::ActiveModel {
    entity::page::ActiveModel {
        id: ActiveValue::Set(row.id),
        school_id: ActiveValue::Set(row.school_id),
        name: ActiveValue::Set(row.name),
        slug: ActiveValue::Set(row.slug),
        components: ActiveValue::Set(row.components),
        is_published: ActiveValue::Set(row.is_published),
        theme_id: ActiveValue::Set(row.theme_id),
        created_at: ActiveValue::Set(row.created_at),
        updated_at: ActiveValue::Set(row.updated_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page_row(components: &str) -> entity::page::Model {
        entity::page::Model {
            id: "p1".to_string(),
            school_id: "s1".to_string(),
            name: "Home".to_string(),
            slug: "home".to_string(),
            components: components.to_string(),
            is_published: false,
            theme_id: None,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn decodes_component_text_into_array() {
        let document =
            page_to_document(page_row(r#"[{"id":"c1","type":"hero","props":{},"order":0}]"#))
                .unwrap();

        assert!(document["components"].is_array());
        assert_eq!(document["components"][0]["type"], "hero");
    }

    #[test]
    fn encodes_component_array_into_text() {
        let mut document = page_to_document(page_row("[]")).unwrap();
        document.insert(
            "components".to_string(),
            json!([{ "id": "c1", "type": "text", "props": { "content": "Hi" }, "order": 2 }]),
        );

        let row = page_from_document(document).unwrap();
        let decoded: Value = serde_json::from_str(&row.components).unwrap();

        assert_eq!(decoded[0]["props"]["content"], "Hi");
        assert_eq!(decoded[0]["order"], 2);
    }

    #[test]
    fn missing_components_encode_as_empty_array() {
        let mut document = page_to_document(page_row("[]")).unwrap();
        document.remove("components");

        let row = page_from_document(document).unwrap();

        assert_eq!(row.components, "[]");
    }

    #[test]
    fn rejects_corrupt_component_text() {
        let result = page_to_document(page_row("{not json"));

        assert!(matches!(result, Err(StorageError::Codec { .. })));
    }
}
