//! Page factory for creating test page entities.

use crate::factory::helpers::{next_id, now_rfc3339};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pages with customizable fields.
///
/// Components are stored the way the relational table stores them: as a JSON-encoded
/// array in a text column.
///
/// # Example
///
/// ```rust,ignore
/// let page = PageFactory::new(&db, &school.id)
///     .components(serde_json::json!([{ "id": "c1", "type": "hero", "props": {}, "order": 0 }]))
///     .build()
///     .await?;
/// ```
pub struct PageFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    school_id: String,
    name: String,
    slug: String,
    components: serde_json::Value,
    is_published: bool,
}

impl<'a> PageFactory<'a> {
    /// Creates a new PageFactory with default values.
    ///
    /// Defaults:
    /// - id: `"page-{n}"`
    /// - name: `"Page {n}"`
    /// - slug: `"page-{n}"`
    /// - components: empty array
    /// - is_published: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `school_id` - ID of the school owning the page
    pub fn new(db: &'a DatabaseConnection, school_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("page-{}", id),
            school_id: school_id.into(),
            name: format!("Page {}", id),
            slug: format!("page-{}", id),
            components: serde_json::Value::Array(Vec::new()),
            is_published: false,
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

    pub fn components(mut self, components: serde_json::Value) -> Self {
        self.components = components;
        self
    }

    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    /// Builds and inserts the page entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::page::Model)` - Created page entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::page::Model, DbErr> {
        let now = now_rfc3339();

        entity::page::ActiveModel {
            id: ActiveValue::Set(self.id),
            school_id: ActiveValue::Set(self.school_id),
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            components: ActiveValue::Set(self.components.to_string()),
            is_published: ActiveValue::Set(self.is_published),
            theme_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now.clone()),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a page with default values for the specified school.
///
/// Shorthand for `PageFactory::new(db, school_id).build().await`.
pub async fn create_page(
    db: &DatabaseConnection,
    school_id: impl Into<String>,
) -> Result<entity::page::Model, DbErr> {
    PageFactory::new(db, school_id).build().await
}
