use crate::{
    model::school::SchoolDto,
    server::{
        data::{page::PageRepository, school::SchoolRepository},
        error::AppError,
        model::school::CreateSchoolParam,
        service::LIST_LIMIT,
        storage::DocumentStore,
    },
};

const SCHOOL_NOT_FOUND: &str = "School not found";

pub struct SchoolService<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> SchoolService<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Creates a school, generating its id & creation timestamp
    pub async fn create(&self, param: CreateSchoolParam) -> Result<SchoolDto, AppError> {
        let school = SchoolRepository::new(self.store).create(param).await?;

        tracing::info!("Created school {} ({})", school.id, school.slug);

        Ok(school.into_dto())
    }

    /// Lists up to 100 schools, oldest first
    pub async fn get_all(&self) -> Result<Vec<SchoolDto>, AppError> {
        let schools = SchoolRepository::new(self.store).get_all(LIST_LIMIT).await?;

        Ok(schools.into_iter().map(|school| school.into_dto()).collect())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<SchoolDto, AppError> {
        let school = SchoolRepository::new(self.store)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(SCHOOL_NOT_FOUND.to_string()))?;

        Ok(school.into_dto())
    }

    /// Sets the theme of a school
    pub async fn update_theme(&self, id: &str, theme_id: String) -> Result<SchoolDto, AppError> {
        let school = SchoolRepository::new(self.store)
            .update_theme(id, theme_id)
            .await?
            .ok_or_else(|| AppError::NotFound(SCHOOL_NOT_FOUND.to_string()))?;

        Ok(school.into_dto())
    }

    /// Deletes a school along with all of its pages.
    ///
    /// The school is removed first, then its pages. On backends with a cascading foreign key
    /// the second step finds nothing left to remove. The two steps are not transactional.
    ///
    /// # Returns
    /// - `Ok(())` - School and pages removed
    /// - `Err(AppError::NotFound)` - No school with this id, nothing was removed
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let deleted = SchoolRepository::new(self.store).delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound(SCHOOL_NOT_FOUND.to_string()));
        }

        let pages = PageRepository::new(self.store).delete_by_school(id).await?;

        tracing::info!("Deleted school {} and {} remaining page(s)", id, pages);

        Ok(())
    }
}
