use super::*;

/// Tests creating a page and reading its components back.
///
/// Verifies that component type, props and order survive storage on both backends.
///
/// Expected: Ok with identical components and matching timestamps
#[tokio::test]
async fn creates_page_with_components() -> Result<(), AppError> {
    for backend in [StorageBackend::Relational, StorageBackend::Document] {
        let test = setup().await?;
        let store = store(&test, backend);
        let school = SchoolRepository::new(store.as_ref())
            .create(school_param("Hillside High"))
            .await?;
        let repo = PageRepository::new(store.as_ref());

        let param = page_param(&school.id, "home");
        let expected = param.components.clone();
        let created = repo.create(param).await?;

        let found = repo.find_by_id(&created.id).await?.unwrap();

        assert_eq!(found.components, expected);
        assert_eq!(found.components[0].props["title"], "Welcome");
        assert_eq!(found.created_at, found.updated_at);
        assert!(!found.is_published);
    }

    Ok(())
}

/// Tests reading pages written by the page factory.
///
/// Expected: Ok with the factory's components decoded
#[tokio::test]
async fn reads_factory_pages() -> Result<(), AppError> {
    let test = setup().await?;
    let db = test.db.as_ref().unwrap();
    let school = factory::create_school(db).await?;
    let page = factory::page::PageFactory::new(db, &school.id)
        .components(json!([{ "id": "c1", "type": "text", "props": { "content": "Hi" }, "order": 4 }]))
        .published(true)
        .build()
        .await?;

    let store = store(&test, StorageBackend::Relational);
    let repo = PageRepository::new(store.as_ref());

    let found = repo.find_by_id(&page.id).await?.unwrap();

    assert!(found.is_published);
    assert_eq!(found.components[0].id, "c1");
    assert_eq!(found.components[0].order, 4);

    Ok(())
}

/// Tests listing pages filtered by school.
///
/// Expected: Ok with only the pages of the requested school
#[tokio::test]
async fn filters_pages_by_school() -> Result<(), AppError> {
    for backend in [StorageBackend::Relational, StorageBackend::Document] {
        let test = setup().await?;
        let store = store(&test, backend);
        let schools = SchoolRepository::new(store.as_ref());
        let first = schools.create(school_param("First")).await?;
        let second = schools.create(school_param("Second")).await?;

        let repo = PageRepository::new(store.as_ref());
        repo.create(page_param(&first.id, "home")).await?;
        repo.create(page_param(&first.id, "about")).await?;
        repo.create(page_param(&second.id, "home")).await?;

        assert_eq!(repo.get_all(Some(&first.id), 100).await?.len(), 2);
        assert_eq!(repo.get_all(Some(&second.id), 100).await?.len(), 1);
        assert_eq!(repo.get_all(None, 100).await?.len(), 3);
        assert!(repo.get_all(Some("missing"), 100).await?.is_empty());
    }

    Ok(())
}

/// Tests publishing a page through a partial update.
///
/// Verifies that only `is_published` and `updated_at` change.
///
/// Expected: Ok(Some) with other fields untouched
#[tokio::test]
async fn partial_update_changes_only_supplied_fields() -> Result<(), AppError> {
    for backend in [StorageBackend::Relational, StorageBackend::Document] {
        let test = setup().await?;
        let store = store(&test, backend);
        let school = SchoolRepository::new(store.as_ref())
            .create(school_param("Hillside High"))
            .await?;
        let repo = PageRepository::new(store.as_ref());
        let created = repo.create(page_param(&school.id, "home")).await?;
        tokio::time::sleep(Duration::from_millis(5)).await;

        let updated = repo
            .update(
                &created.id,
                UpdatePageParam {
                    is_published: Some(true),
                    ..Default::default()
                },
            )
            .await?
            .unwrap();

        assert!(updated.is_published);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.slug, created.slug);
        assert_eq!(updated.components, created.components);
        assert_eq!(updated.created_at, created.created_at);
    }

    Ok(())
}

/// Tests updating a page that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_missing_page_returns_none() -> Result<(), AppError> {
    let test = setup().await?;
    let store = store(&test, StorageBackend::Relational);
    let repo = PageRepository::new(store.as_ref());

    let result = repo
        .update(
            "missing",
            UpdatePageParam {
                name: Some("Start".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests creating a page for a school that doesn't exist on the relational backend.
///
/// Expected: Err(AppError::StorageErr) from the foreign key
#[tokio::test]
async fn rejects_dangling_school_on_relational_backend() -> Result<(), AppError> {
    let test = setup().await?;
    let store = store(&test, StorageBackend::Relational);
    let repo = PageRepository::new(store.as_ref());

    let result = repo.create(page_param("missing", "home")).await;

    assert!(matches!(result, Err(AppError::StorageErr(_))));

    Ok(())
}

/// Tests deleting pages one at a time and by school.
///
/// Expected: Ok with removal counts matching the stored pages
#[tokio::test]
async fn deletes_pages() -> Result<(), AppError> {
    for backend in [StorageBackend::Relational, StorageBackend::Document] {
        let test = setup().await?;
        let store = store(&test, backend);
        let school = SchoolRepository::new(store.as_ref())
            .create(school_param("Hillside High"))
            .await?;
        let repo = PageRepository::new(store.as_ref());

        let home = repo.create(page_param(&school.id, "home")).await?;
        repo.create(page_param(&school.id, "about")).await?;
        repo.create(page_param(&school.id, "news")).await?;

        assert!(repo.delete(&home.id).await?);
        assert!(!repo.delete(&home.id).await?);
        assert_eq!(repo.delete_by_school(&school.id).await?, 2);
        assert!(repo.get_all(Some(&school.id), 100).await?.is_empty());
    }

    Ok(())
}

/// Tests listing factory pages in creation order.
///
/// Expected: Ok with pages ordered by `created_at` and the limit applied
#[tokio::test]
async fn lists_pages_in_creation_order() -> Result<(), AppError> {
    let test = setup().await?;
    let db = test.db.as_ref().unwrap();
    let (school, pages) = factory::helpers::create_school_with_pages(db, 3).await?;
    let store = store(&test, StorageBackend::Relational);
    let repo = PageRepository::new(store.as_ref());

    let listed = repo.get_all(Some(&school.id), 2).await?;

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, pages[0].id);
    assert_eq!(listed[1].id, pages[1].id);

    Ok(())
}
