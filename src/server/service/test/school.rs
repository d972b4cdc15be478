use super::*;

/// Tests fetching a school that doesn't exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_unknown_school_is_not_found() -> Result<(), AppError> {
    for backend in BACKENDS {
        let store = store(backend).await;
        let service = SchoolService::new(store.as_ref());

        let result = service.get_by_id("missing").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    Ok(())
}

/// Tests that deleting a school removes every page of that school.
///
/// Verifies the cascade on both backends and that pages of other schools survive.
///
/// Expected: Ok with no page of the deleted school retrievable
#[tokio::test]
async fn delete_school_cascades_to_pages() -> Result<(), AppError> {
    for backend in BACKENDS {
        let store = store(backend).await;
        let schools = SchoolService::new(store.as_ref());
        let pages = PageService::new(store.as_ref());

        let doomed = schools.create(create_school("Doomed")).await?;
        let kept = schools.create(create_school("Kept")).await?;

        let home = pages.create(create_page(&doomed.id, "home")).await?;
        pages.create(create_page(&doomed.id, "about")).await?;
        pages.create(create_page(&kept.id, "home")).await?;

        schools.delete(&doomed.id).await?;

        assert!(pages.get_all(Some(&doomed.id)).await?.is_empty());
        assert!(matches!(
            pages.get_by_id(&home.id).await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(pages.get_all(Some(&kept.id)).await?.len(), 1);
        assert!(matches!(
            schools.get_by_id(&doomed.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    Ok(())
}

/// Tests deleting a school that doesn't exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn delete_unknown_school_is_not_found() -> Result<(), AppError> {
    let store = store(StorageBackend::Relational).await;
    let service = SchoolService::new(store.as_ref());

    let result = service.delete("missing").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests switching the theme of a school.
///
/// Expected: Ok with the new theme id, NotFound for a missing school
#[tokio::test]
async fn updates_school_theme() -> Result<(), AppError> {
    let store = store(StorageBackend::Document).await;
    let service = SchoolService::new(store.as_ref());

    let school = service.create(create_school("Hillside")).await?;
    assert_eq!(school.theme_id, "default");

    let updated = service
        .update_theme(&school.id, "ocean".to_string())
        .await?;
    assert_eq!(updated.theme_id, "ocean");
    assert_eq!(service.get_by_id(&school.id).await?.theme_id, "ocean");

    let missing = service.update_theme("missing", "ocean".to_string()).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
