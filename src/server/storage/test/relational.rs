use super::*;

/// Tests that page components survive a write & read as structured JSON.
///
/// Verifies that the component array is encoded into the text column on insert and decoded
/// back into an array on read, keeping type, props and order intact.
///
/// Expected: Ok with identical components on read
#[tokio::test]
async fn round_trips_page_components() -> Result<(), StorageError> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = RelationalStore::new(db.clone());

    store
        .insert(Collection::Schools, school_document("s1", "2026-01-01T00:00:00Z"))
        .await?;
    let inserted = page_document("p1", "s1", "2026-01-01T00:00:00Z");
    store.insert(Collection::Pages, inserted.clone()).await?;

    let found = store
        .find_one(Collection::Pages, &Filter::by_id("p1"))
        .await?
        .unwrap();

    assert_eq!(found["components"], inserted["components"]);
    assert_eq!(found["components"][1]["props"]["content"], "Hello");
    assert_eq!(found["components"][1]["order"], 1);

    Ok(())
}

/// Tests that the raw page row holds JSON text.
///
/// Verifies the relational encoding by reading the `page` row directly.
///
/// Expected: components column parses as a two element array
#[tokio::test]
async fn stores_components_as_json_text() -> Result<(), StorageError> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = RelationalStore::new(db.clone());

    store
        .insert(Collection::Schools, school_document("s1", "2026-01-01T00:00:00Z"))
        .await?;
    store
        .insert(Collection::Pages, page_document("p1", "s1", "2026-01-01T00:00:00Z"))
        .await?;

    let row = entity::prelude::Page::find_by_id("p1".to_string())
        .one(db)
        .await?
        .unwrap();
    let decoded: Value = serde_json::from_str(&row.components).unwrap();

    assert_eq!(decoded.as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Tests inserting a page referencing a missing school.
///
/// Verifies that the foreign key rejects the dangling reference.
///
/// Expected: Err(StorageError::ForeignKeyViolation)
#[tokio::test]
async fn rejects_page_for_missing_school() -> Result<(), StorageError> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = RelationalStore::new(db.clone());

    let result = store
        .insert(
            Collection::Pages,
            page_document("p1", "missing", "2026-01-01T00:00:00Z"),
        )
        .await;

    assert!(matches!(result, Err(StorageError::ForeignKeyViolation(_))));

    Ok(())
}

/// Tests filtering on a field that isn't a column.
///
/// Expected: Err(StorageError::UnknownField)
#[tokio::test]
async fn rejects_unknown_filter_field() -> Result<(), StorageError> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = RelationalStore::new(db.clone());

    let result = store
        .find(Collection::Schools, &Filter::all().eq("colour", "red"), 10)
        .await;

    assert!(matches!(result, Err(StorageError::UnknownField { .. })));

    Ok(())
}

/// Tests filtering pages by school and publication state.
///
/// Verifies that multiple terms combine as a conjunction and that results come back in
/// creation order.
///
/// Expected: Ok with only the matching pages, oldest first
#[tokio::test]
async fn finds_by_multiple_terms_in_creation_order() -> Result<(), StorageError> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = RelationalStore::new(db.clone());

    store
        .insert(Collection::Schools, school_document("s1", "2026-01-01T00:00:00Z"))
        .await?;
    store
        .insert(Collection::Schools, school_document("s2", "2026-01-01T00:00:00Z"))
        .await?;

    store
        .insert(Collection::Pages, page_document("late", "s1", "2026-03-01T00:00:00Z"))
        .await?;
    store
        .insert(Collection::Pages, page_document("early", "s1", "2026-02-01T00:00:00Z"))
        .await?;
    store
        .insert(Collection::Pages, page_document("other", "s2", "2026-02-01T00:00:00Z"))
        .await?;

    let pages = store
        .find(
            Collection::Pages,
            &Filter::all().eq("school_id", "s1").eq("is_published", false),
            100,
        )
        .await?;

    let ids: Vec<_> = pages.iter().map(|page| page["id"].clone()).collect();
    assert_eq!(ids, vec![json!("early"), json!("late")]);

    let limited = store.find(Collection::Pages, &Filter::all(), 2).await?;
    assert_eq!(limited.len(), 2);

    Ok(())
}

/// Tests patching a page.
///
/// Verifies that only the patched fields change and that a missing document yields `None`.
///
/// Expected: Ok(Some) with merged fields, Ok(None) for a missing id
#[tokio::test]
async fn updates_by_merging_patch() -> Result<(), StorageError> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = RelationalStore::new(db.clone());

    store
        .insert(Collection::Schools, school_document("s1", "2026-01-01T00:00:00Z"))
        .await?;
    store
        .insert(Collection::Pages, page_document("p1", "s1", "2026-01-01T00:00:00Z"))
        .await?;

    let updated = store
        .update(
            Collection::Pages,
            &Filter::by_id("p1"),
            document(json!({ "is_published": true, "components": [] })),
        )
        .await?
        .unwrap();

    assert_eq!(updated["is_published"], true);
    assert_eq!(updated["components"], json!([]));
    assert_eq!(updated["name"], "Home");

    let missing = store
        .update(
            Collection::Pages,
            &Filter::by_id("missing"),
            document(json!({ "is_published": true })),
        )
        .await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests that deleting a school cascades to its pages through the foreign key.
///
/// Expected: Ok with 1 school removed and no pages left for it
#[tokio::test]
async fn delete_school_cascades_to_pages() -> Result<(), StorageError> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = RelationalStore::new(db.clone());

    store
        .insert(Collection::Schools, school_document("s1", "2026-01-01T00:00:00Z"))
        .await?;
    store
        .insert(Collection::Pages, page_document("p1", "s1", "2026-01-01T00:00:00Z"))
        .await?;
    store
        .insert(Collection::Pages, page_document("p2", "s1", "2026-01-01T00:00:00Z"))
        .await?;

    let removed = store
        .delete(Collection::Schools, &Filter::by_id("s1"))
        .await?;
    assert_eq!(removed, 1);

    let pages = store
        .find(Collection::Pages, &Filter::all().eq("school_id", "s1"), 100)
        .await?;
    assert!(pages.is_empty());

    Ok(())
}
