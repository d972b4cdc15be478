use chrono::Utc;

use crate::server::{
    error::AppError,
    model::school::{CreateSchoolParam, School},
    storage::{Collection, Document, DocumentStore, Filter},
};
use serde_json::Value;

pub struct SchoolRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> SchoolRepository<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Creates a new school, stamping `created_at` with the current time.
    ///
    /// # Arguments
    /// - `param` - School fields; omitted optional fields take their defaults
    ///
    /// # Returns
    /// - `Ok(School)` - The school as stored
    /// - `Err(AppError)` - Storage or encoding failure
    pub async fn create(&self, param: CreateSchoolParam) -> Result<School, AppError> {
        let school = param.into_school(Utc::now());

        let stored = self
            .store
            .insert(Collection::Schools, school.to_document()?)
            .await?;

        Ok(School::from_document(stored)?)
    }

    /// Gets up to `limit` schools, oldest first.
    pub async fn get_all(&self, limit: u64) -> Result<Vec<School>, AppError> {
        let documents = self
            .store
            .find(Collection::Schools, &Filter::all(), limit)
            .await?;

        let schools = documents
            .into_iter()
            .map(School::from_document)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(schools)
    }

    /// Finds a school by id.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<School>, AppError> {
        let document = self
            .store
            .find_one(Collection::Schools, &Filter::by_id(id))
            .await?;

        Ok(document.map(School::from_document).transpose()?)
    }

    /// Checks whether at least one school is stored.
    pub async fn exists_any(&self) -> Result<bool, AppError> {
        let documents = self
            .store
            .find(Collection::Schools, &Filter::all(), 1)
            .await?;

        Ok(!documents.is_empty())
    }

    /// Sets the theme of a school.
    ///
    /// # Returns
    /// - `Ok(Some(School))` - The updated school
    /// - `Ok(None)` - No school with this id
    /// - `Err(AppError)` - Storage or decoding failure
    pub async fn update_theme(
        &self,
        id: &str,
        theme_id: String,
    ) -> Result<Option<School>, AppError> {
        let mut patch = Document::new();
        patch.insert("theme_id".to_string(), Value::String(theme_id));

        let document = self
            .store
            .update(Collection::Schools, &Filter::by_id(id), patch)
            .await?;

        Ok(document.map(School::from_document).transpose()?)
    }

    /// Deletes a school by id.
    ///
    /// Pages of the school are not touched here; the service removes them explicitly.
    ///
    /// # Returns
    /// - `Ok(true)` - The school was removed
    /// - `Ok(false)` - No school with this id
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let removed = self
            .store
            .delete(Collection::Schools, &Filter::by_id(id))
            .await?;

        Ok(removed > 0)
    }
}
