pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_school_table;
mod m20260110_000002_create_page_table;
mod m20260110_000003_create_document_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_school_table::Migration),
            Box::new(m20260110_000002_create_page_table::Migration),
            Box::new(m20260110_000003_create_document_table::Migration),
        ]
    }
}
