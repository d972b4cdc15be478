//! One-time population of demo content.

use serde_json::{json, Map, Value};

use crate::{
    model::seed::SeedDto,
    server::{
        data::{page::PageRepository, school::SchoolRepository},
        error::AppError,
        model::{
            page::{Component, CreatePageParam},
            school::{CreateSchoolParam, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR},
        },
        service::catalog::{default_features, GALLERY_IMAGES, HERO_IMAGE},
        storage::DocumentStore,
    },
};

pub const DEMO_SCHOOL_ID: &str = "demo-school-1";
pub const DEMO_PAGE_ID: &str = "demo-page-1";

pub struct SeedService<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> SeedService<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Inserts the demo school & its published home page unless any school exists.
    ///
    /// The existence check and the inserts are separate calls, so two concurrent seeds
    /// may both pass the check; the second then fails on the duplicate demo ids.
    ///
    /// # Returns
    /// - `Ok(SeedDto)` - Either the ids of the inserted demo records, or a message saying
    ///   data was already present
    /// - `Err(AppError)` - Storage failure
    pub async fn seed(&self) -> Result<SeedDto, AppError> {
        let school_repo = SchoolRepository::new(self.store);

        if school_repo.exists_any().await? {
            return Ok(SeedDto {
                message: "Data already seeded".to_string(),
                school_id: None,
                page_id: None,
            });
        }

        let school = school_repo
            .create(CreateSchoolParam {
                id: Some(DEMO_SCHOOL_ID.to_string()),
                name: "Sunshine Elementary".to_string(),
                slug: "sunshine-elementary".to_string(),
                logo_url: None,
                primary_color: Some(DEFAULT_PRIMARY_COLOR.to_string()),
                secondary_color: Some(DEFAULT_SECONDARY_COLOR.to_string()),
                theme_id: None,
            })
            .await?;

        let page = PageRepository::new(self.store)
            .create(CreatePageParam {
                id: Some(DEMO_PAGE_ID.to_string()),
                school_id: school.id.clone(),
                name: "Home".to_string(),
                slug: "home".to_string(),
                components: demo_components(),
                is_published: true,
                theme_id: None,
            })
            .await?;

        tracing::info!("Seeded demo school {} with page {}", school.id, page.id);

        Ok(SeedDto {
            message: "Demo data seeded successfully".to_string(),
            school_id: Some(school.id),
            page_id: Some(page.id),
        })
    }
}

fn component(id: &str, component_type: &str, order: i32, props: Value) -> Component {
    Component {
        id: id.to_string(),
        component_type: component_type.to_string(),
        props: match props {
            Value::Object(props) => props,
            _ => Map::new(),
        },
        order,
    }
}

fn demo_components() -> Vec<Component> {
    vec![
        component(
            "comp-1",
            "hero",
            0,
            json!({
                "title": "Welcome to Sunshine Elementary",
                "subtitle": "Where Every Child Shines Bright",
                "backgroundImage": HERO_IMAGE,
                "buttonText": "Enroll Now",
                "buttonLink": "#contact"
            }),
        ),
        component(
            "comp-2",
            "features",
            1,
            json!({
                "title": "Why Choose Sunshine Elementary?",
                "features": default_features()
            }),
        ),
        component(
            "comp-3",
            "announcements",
            2,
            json!({
                "title": "Latest News & Updates",
                "items": [
                    {
                        "title": "Parent-Teacher Conference",
                        "date": "Jan 15, 2026",
                        "excerpt": "Join us for our upcoming parent-teacher conference to discuss your child's progress."
                    },
                    {
                        "title": "Spring Break Schedule",
                        "date": "Jan 10, 2026",
                        "excerpt": "Important dates for the upcoming spring break period."
                    },
                    {
                        "title": "Science Fair Winners",
                        "date": "Jan 5, 2026",
                        "excerpt": "Congratulations to all our talented science fair participants!"
                    }
                ]
            }),
        ),
        component(
            "comp-4",
            "gallery",
            3,
            json!({
                "title": "Life at Sunshine Elementary",
                "images": GALLERY_IMAGES
            }),
        ),
        component(
            "comp-5",
            "contact",
            4,
            json!({
                "title": "Get in Touch",
                "address": "123 Sunshine Lane, Happy Valley, HV 12345",
                "phone": "(555) 123-4567",
                "email": "info@sunshine-elementary.edu",
                "showMap": true
            }),
        ),
    ]
}
