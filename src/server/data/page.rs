use chrono::Utc;

use crate::server::{
    error::AppError,
    model::page::{CreatePageParam, Page, UpdatePageParam},
    storage::{Collection, DocumentStore, Filter},
};

pub struct PageRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> PageRepository<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Creates a new page with `created_at` & `updated_at` set to the current time.
    ///
    /// # Returns
    /// - `Ok(Page)` - The page as stored
    /// - `Err(AppError::StorageErr)` - Storage failure, including a foreign key violation
    ///   when the relational backend finds no school with `school_id`
    pub async fn create(&self, param: CreatePageParam) -> Result<Page, AppError> {
        let page = param.into_page(Utc::now());

        let stored = self
            .store
            .insert(Collection::Pages, page.to_document()?)
            .await?;

        Ok(Page::from_document(stored)?)
    }

    /// Gets up to `limit` pages, optionally restricted to one school, oldest first.
    pub async fn get_all(
        &self,
        school_id: Option<&str>,
        limit: u64,
    ) -> Result<Vec<Page>, AppError> {
        let filter = match school_id {
            Some(school_id) => Filter::all().eq("school_id", school_id),
            None => Filter::all(),
        };

        let documents = self.store.find(Collection::Pages, &filter, limit).await?;

        let pages = documents
            .into_iter()
            .map(Page::from_document)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(pages)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Page>, AppError> {
        let document = self
            .store
            .find_one(Collection::Pages, &Filter::by_id(id))
            .await?;

        Ok(document.map(Page::from_document).transpose()?)
    }

    /// Applies a partial update to a page and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Page))` - The page after the update
    /// - `Ok(None)` - No page with this id
    /// - `Err(AppError)` - Storage, encoding or decoding failure
    pub async fn update(&self, id: &str, param: UpdatePageParam) -> Result<Option<Page>, AppError> {
        let patch = param.into_patch(Utc::now())?;

        let document = self
            .store
            .update(Collection::Pages, &Filter::by_id(id), patch)
            .await?;

        Ok(document.map(Page::from_document).transpose()?)
    }

    /// Deletes a page by id, returning whether it existed.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let removed = self
            .store
            .delete(Collection::Pages, &Filter::by_id(id))
            .await?;

        Ok(removed > 0)
    }

    /// Deletes every page of a school, returning how many were removed.
    pub async fn delete_by_school(&self, school_id: &str) -> Result<u64, AppError> {
        let removed = self
            .store
            .delete(Collection::Pages, &Filter::all().eq("school_id", school_id))
            .await?;

        Ok(removed)
    }
}
