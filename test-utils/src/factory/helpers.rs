//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Current time formatted the way stored timestamps are: RFC 3339, microseconds, `Z`.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}

/// Creates a school with the provided number of default pages.
///
/// # Arguments
/// - `db` - Database connection
/// - `page_count` - Number of pages to create for the school
///
/// # Returns
/// - `Ok((school, pages))` - Created school and its pages in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_school_with_pages(
    db: &DatabaseConnection,
    page_count: usize,
) -> Result<(entity::school::Model, Vec<entity::page::Model>), DbErr> {
    let school = crate::factory::school::create_school(db).await?;

    let mut pages = Vec::with_capacity(page_count);
    for _ in 0..page_count {
        pages.push(crate::factory::page::create_page(db, &school.id).await?);
    }

    Ok((school, pages))
}
