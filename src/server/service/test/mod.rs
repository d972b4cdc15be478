mod school;

use crate::{
    model::{
        page::{CreatePageDto, UpdatePageDto},
        school::CreateSchoolDto,
    },
    server::{
        error::AppError,
        model::{
            page::{CreatePageParam, UpdatePageParam},
            school::CreateSchoolParam,
        },
        service::{page::PageService, school::SchoolService, seed::SeedService},
        storage::{DocumentStore, StorageBackend},
    },
};
use serde_json::json;
use std::{sync::Arc, time::Duration};
use test_utils::builder::TestBuilder;

const BACKENDS: [StorageBackend; 2] = [StorageBackend::Relational, StorageBackend::Document];

async fn store(backend: StorageBackend) -> Arc<dyn DocumentStore> {
    let test = TestBuilder::new().with_cms_tables().build().await.unwrap();

    backend.connect(test.db.unwrap())
}

fn create_school(name: &str) -> CreateSchoolParam {
    CreateSchoolParam::from_dto(CreateSchoolDto {
        name: name.to_string(),
        slug: name.to_lowercase(),
        logo_url: None,
        primary_color: None,
        secondary_color: None,
        theme_id: None,
    })
}

fn create_page(school_id: &str, slug: &str) -> CreatePageParam {
    let dto: CreatePageDto = serde_json::from_value(json!({
        "school_id": school_id,
        "name": slug,
        "slug": slug,
        "components": [
            { "type": "hero", "props": { "title": "Welcome" } },
            { "id": "fixed", "type": "text", "props": { "content": "Hi" }, "order": 1 }
        ]
    }))
    .unwrap();

    CreatePageParam::from_dto(dto)
}
