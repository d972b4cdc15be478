use crate::{
    model::page::PageDto,
    server::{
        data::page::PageRepository,
        error::AppError,
        model::page::{CreatePageParam, UpdatePageParam},
        service::LIST_LIMIT,
        storage::DocumentStore,
    },
};

const PAGE_NOT_FOUND: &str = "Page not found";

pub struct PageService<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> PageService<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Creates a page; the owning school isn't looked up beforehand
    pub async fn create(&self, param: CreatePageParam) -> Result<PageDto, AppError> {
        let page = PageRepository::new(self.store).create(param).await?;

        tracing::info!(
            "Created page {} for school {} with {} component(s)",
            page.id,
            page.school_id,
            page.components.len()
        );

        Ok(page.into_dto())
    }

    /// Lists up to 100 pages, optionally only those of one school
    pub async fn get_all(&self, school_id: Option<&str>) -> Result<Vec<PageDto>, AppError> {
        let pages = PageRepository::new(self.store)
            .get_all(school_id, LIST_LIMIT)
            .await?;

        Ok(pages.into_iter().map(|page| page.into_dto()).collect())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<PageDto, AppError> {
        let page = PageRepository::new(self.store)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(PAGE_NOT_FOUND.to_string()))?;

        Ok(page.into_dto())
    }

    /// Applies the supplied fields to a page and refreshes its `updated_at`
    pub async fn update(&self, id: &str, param: UpdatePageParam) -> Result<PageDto, AppError> {
        let page = PageRepository::new(self.store)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(PAGE_NOT_FOUND.to_string()))?;

        Ok(page.into_dto())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let deleted = PageRepository::new(self.store).delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound(PAGE_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}
