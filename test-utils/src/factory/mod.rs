//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting school and page rows with sensible
//! defaults, reducing boilerplate in tests. Factories write directly to the relational
//! `school` and `page` tables.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let school = factory::create_school(&db).await?;
//!     let page = factory::create_page(&db, &school.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let page = factory::page::PageFactory::new(&db, &school.id)
//!     .slug("about")
//!     .published(true)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod page;
pub mod school;

pub use page::create_page;
pub use school::create_school;
