use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use serde_json::Value;

use super::{merge, Collection, Document, DocumentStore, Filter};
use crate::server::error::storage::StorageError;

/// Storage backend keeping every record as a JSON body in the `document` table.
///
/// Only the `id` term of a filter is pushed into SQL; the remaining terms are matched in
/// memory against the decoded bodies. Results are ordered by their `created_at` field.
pub struct DocumentTableStore {
    db: DatabaseConnection,
}

impl DocumentTableStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads and decodes every document of the collection matching `filter`.
    async fn matching(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Vec<Document>, StorageError> {
        let mut query = entity::prelude::Document::find()
            .filter(entity::document::Column::Collection.eq(collection.name()));

        if let Some(id) = filter.id() {
            query = query.filter(entity::document::Column::Id.eq(id));
        }

        let rows = query.all(&self.db).await?;

        let mut documents = Vec::with_capacity(rows.len());
        for row in rows {
            let document = body_to_document(collection, row.body)?;
            if filter.matches(&document) {
                documents.push(document);
            }
        }

        documents.sort_by(|a, b| created_at(a).cmp(created_at(b)));

        Ok(documents)
    }

    fn active_model(
        collection: Collection,
        id: String,
        document: Document,
    ) -> entity::document::ActiveModel {
        entity::document::ActiveModel {
            collection: ActiveValue::Set(collection.name().to_string()),
            id: ActiveValue::Set(id),
            body: ActiveValue::Set(Value::Object(document)),
        }
    }
}

fn body_to_document(collection: Collection, body: Value) -> Result<Document, StorageError> {
    match body {
        Value::Object(document) => Ok(document),
        _ => Err(StorageError::NotAnObject {
            collection: collection.name(),
        }),
    }
}

fn created_at(document: &Document) -> &str {
    document
        .get("created_at")
        .and_then(Value::as_str)
        .unwrap_or_default()
}

fn document_id(collection: Collection, document: &Document) -> Result<String, StorageError> {
    document
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(StorageError::MissingId {
            collection: collection.name(),
        })
}

#[async_trait]
impl DocumentStore for DocumentTableStore {
    async fn insert(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<Document, StorageError> {
        let id = document_id(collection, &document)?;

        let row = Self::active_model(collection, id, document)
            .insert(&self.db)
            .await?;

        body_to_document(collection, row.body)
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
        limit: u64,
    ) -> Result<Vec<Document>, StorageError> {
        let mut documents = self.matching(collection, filter).await?;
        documents.truncate(usize::try_from(limit).unwrap_or(usize::MAX));

        Ok(documents)
    }

    async fn update(
        &self,
        collection: Collection,
        filter: &Filter,
        patch: Document,
    ) -> Result<Option<Document>, StorageError> {
        let Some(mut document) = self.matching(collection, filter).await?.into_iter().next()
        else {
            return Ok(None);
        };

        let id = document_id(collection, &document)?;
        merge(&mut document, patch);

        let row = Self::active_model(collection, id, document)
            .update(&self.db)
            .await?;

        Ok(Some(body_to_document(collection, row.body)?))
    }

    async fn delete(&self, collection: Collection, filter: &Filter) -> Result<u64, StorageError> {
        let ids = self
            .matching(collection, filter)
            .await?
            .iter()
            .map(|document| document_id(collection, document))
            .collect::<Result<Vec<_>, _>>()?;

        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Document::delete_many()
            .filter(entity::document::Column::Collection.eq(collection.name()))
            .filter(entity::document::Column::Id.is_in(ids))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
