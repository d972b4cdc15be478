mod page;

use crate::server::{
    data::{page::PageRepository, school::SchoolRepository},
    error::AppError,
    model::{
        page::{Component, CreatePageParam, UpdatePageParam},
        school::{CreateSchoolParam, DEFAULT_THEME_ID},
        timestamp,
    },
    storage::{DocumentStore, StorageBackend},
};
use chrono::Utc;
use serde_json::{json, Map};
use std::{sync::Arc, time::Duration};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

async fn setup() -> Result<TestContext, AppError> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();

    Ok(test)
}

fn store(test: &TestContext, backend: StorageBackend) -> Arc<dyn DocumentStore> {
    backend.connect(test.db.clone().unwrap())
}

fn school_param(name: &str) -> CreateSchoolParam {
    CreateSchoolParam {
        id: None,
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        logo_url: None,
        primary_color: None,
        secondary_color: None,
        theme_id: None,
    }
}

fn page_param(school_id: &str, slug: &str) -> CreatePageParam {
    let mut props = Map::new();
    props.insert("title".to_string(), json!("Welcome"));

    CreatePageParam {
        id: None,
        school_id: school_id.to_string(),
        name: slug.to_string(),
        slug: slug.to_string(),
        components: vec![
            Component::new("hero", props, 0),
            Component::new("spacer", Map::new(), 1),
        ],
        is_published: false,
        theme_id: None,
    }
}
