use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use serde_json::Value;
use std::str::FromStr;

use super::{codec, merge, Collection, Document, DocumentStore, Filter};
use crate::server::error::storage::StorageError;

/// Storage backend over the typed `school` & `page` tables.
pub struct RelationalStore {
    db: DatabaseConnection,
}

impl RelationalStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Translates a filter into a SQL condition on the columns of `E`.
///
/// # Arguments
/// - `collection` - Collection being queried, used for error reporting
/// - `filter` - Equality terms to translate
///
/// # Returns
/// - `Ok(Condition)` - Conjunction of column equality expressions
/// - `Err(StorageError::UnknownField)` - A term names a field that isn't a column
/// - `Err(StorageError::UnsupportedFilterValue)` - A term value has no column equivalent
fn condition<E: EntityTrait>(
    collection: Collection,
    filter: &Filter,
) -> Result<Condition, StorageError> {
    let mut condition = Condition::all();

    for (field, value) in filter.terms() {
        let column =
            E::Column::from_str(field).map_err(|_| StorageError::UnknownField {
                collection: collection.name(),
                field: field.clone(),
            })?;

        let unsupported = |kind: &'static str| StorageError::UnsupportedFilterValue {
            collection: collection.name(),
            field: field.clone(),
            kind,
        };

        let expr = match value {
            Value::String(value) => column.eq(value.clone()),
            Value::Bool(value) => column.eq(*value),
            Value::Number(number) => match number.as_i64() {
                Some(value) => column.eq(value),
                None => return Err(unsupported("non-integer number")),
            },
            Value::Null => column.is_null(),
            Value::Array(_) => return Err(unsupported("array")),
            Value::Object(_) => return Err(unsupported("object")),
        };

        condition = condition.add(expr);
    }

    Ok(condition)
}

impl RelationalStore {
    async fn find_schools(
        &self,
        filter: &Filter,
        limit: u64,
    ) -> Result<Vec<entity::school::Model>, StorageError> {
        let schools = entity::prelude::School::find()
            .filter(condition::<entity::school::Entity>(
                Collection::Schools,
                filter,
            )?)
            .order_by_asc(entity::school::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(schools)
    }

    async fn find_pages(
        &self,
        filter: &Filter,
        limit: u64,
    ) -> Result<Vec<entity::page::Model>, StorageError> {
        let pages = entity::prelude::Page::find()
            .filter(condition::<entity::page::Entity>(Collection::Pages, filter)?)
            .order_by_asc(entity::page::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(pages)
    }
}

#[async_trait]
impl DocumentStore for RelationalStore {
    async fn insert(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<Document, StorageError> {
        match collection {
            Collection::Schools => {
                let row = codec::school_from_document(document)?;
                let school = codec::school_active_model(row).insert(&self.db).await?;

                codec::school_to_document(school)
            }
            Collection::Pages => {
                let row = codec::page_from_document(document)?;
                let page = codec::page_active_model(row).insert(&self.db).await?;

                codec::page_to_document(page)
            }
        }
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
        limit: u64,
    ) -> Result<Vec<Document>, StorageError> {
        match collection {
            Collection::Schools => self
                .find_schools(filter, limit)
                .await?
                .into_iter()
                .map(codec::school_to_document)
                .collect(),
            Collection::Pages => self
                .find_pages(filter, limit)
                .await?
                .into_iter()
                .map(codec::page_to_document)
                .collect(),
        }
    }

    async fn update(
        &self,
        collection: Collection,
        filter: &Filter,
        patch: Document,
    ) -> Result<Option<Document>, StorageError> {
        let Some(mut document) = self.find_one(collection, filter).await? else {
            return Ok(None);
        };

        merge(&mut document, patch);

        let updated = match collection {
            Collection::Schools => {
                let row = codec::school_from_document(document)?;
                let school = codec::school_active_model(row).update(&self.db).await?;

                codec::school_to_document(school)?
            }
            Collection::Pages => {
                let row = codec::page_from_document(document)?;
                let page = codec::page_active_model(row).update(&self.db).await?;

                codec::page_to_document(page)?
            }
        };

        Ok(Some(updated))
    }

    async fn delete(&self, collection: Collection, filter: &Filter) -> Result<u64, StorageError> {
        let result = match collection {
            Collection::Schools => {
                entity::prelude::School::delete_many()
                    .filter(condition::<entity::school::Entity>(collection, filter)?)
                    .exec(&self.db)
                    .await?
            }
            Collection::Pages => {
                entity::prelude::Page::delete_many()
                    .filter(condition::<entity::page::Entity>(collection, filter)?)
                    .exec(&self.db)
                    .await?
            }
        };

        Ok(result.rows_affected)
    }
}
