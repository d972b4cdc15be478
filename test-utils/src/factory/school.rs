//! School factory for creating test school entities.

use crate::factory::helpers::{next_id, now_rfc3339};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test schools with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let school = SchoolFactory::new(&db)
///     .name("Hillside High")
///     .theme_id("ocean")
///     .build()
///     .await?;
/// ```
pub struct SchoolFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    slug: String,
    logo_url: Option<String>,
    theme_id: String,
}

impl<'a> SchoolFactory<'a> {
    /// Creates a new SchoolFactory with default values.
    ///
    /// Defaults:
    /// - id: `"school-{n}"`
    /// - name: `"School {n}"`
    /// - slug: `"school-{n}"`
    /// - theme_id: `"default"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `SchoolFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("school-{}", id),
            name: format!("School {}", id),
            slug: format!("school-{}", id),
            logo_url: None,
            theme_id: "default".to_string(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }

    pub fn theme_id(mut self, theme_id: impl Into<String>) -> Self {
        self.theme_id = theme_id.into();
        self
    }

    /// Builds and inserts the school entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::school::Model)` - Created school entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::school::Model, DbErr> {
        entity::school::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            logo_url: ActiveValue::Set(self.logo_url),
            primary_color: ActiveValue::Set("#1D4ED8".to_string()),
            secondary_color: ActiveValue::Set("#FBBF24".to_string()),
            theme_id: ActiveValue::Set(self.theme_id),
            created_at: ActiveValue::Set(now_rfc3339()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a school with default values.
///
/// Shorthand for `SchoolFactory::new(db).build().await`.
pub async fn create_school(db: &DatabaseConnection) -> Result<entity::school::Model, DbErr> {
    SchoolFactory::new(db).build().await
}
