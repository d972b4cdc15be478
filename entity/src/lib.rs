//! SeaORM entity models for the campus CMS database.
//!
//! `school` and `page` back the relational storage backend, `document` backs the
//! document-table backend where every record is stored as a JSON body.

pub mod document;
pub mod page;
pub mod prelude;
pub mod school;
