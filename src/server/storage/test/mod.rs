mod relational;

use super::*;
use crate::server::error::storage::StorageError;
use sea_orm::EntityTrait;
use serde_json::json;
use test_utils::builder::TestBuilder;

fn document(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected a JSON object"),
    }
}

fn school_document(id: &str, created_at: &str) -> Document {
    document(json!({
        "id": id,
        "name": format!("School {}", id),
        "slug": id,
        "logo_url": null,
        "primary_color": "#1D4ED8",
        "secondary_color": "#FBBF24",
        "theme_id": "default",
        "created_at": created_at,
    }))
}

fn page_document(id: &str, school_id: &str, created_at: &str) -> Document {
    document(json!({
        "id": id,
        "school_id": school_id,
        "name": "Home",
        "slug": "home",
        "components": [
            { "id": "c1", "type": "hero", "props": { "title": "Welcome" }, "order": 0 },
            { "id": "c2", "type": "text", "props": { "content": "Hello" }, "order": 1 }
        ],
        "is_published": false,
        "theme_id": null,
        "created_at": created_at,
        "updated_at": created_at,
    }))
}
