use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComponentDto {
    pub id: String,
    #[serde(rename = "type")]
    pub component_type: String,
    #[schema(value_type = Object)]
    pub props: Map<String, Value>,
    pub order: i32,
}

/// Component as submitted by the builder; server fills any omitted field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComponentInputDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub props: Map<String, Value>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageDto {
    pub id: String,
    pub school_id: String,
    pub name: String,
    pub slug: String,
    pub components: Vec<ComponentDto>,
    pub is_published: bool,
    pub theme_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePageDto {
    pub school_id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub components: Vec<ComponentInputDto>,
    #[serde(default)]
    pub theme_id: Option<String>,
}

/// Partial page update, omitted fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePageDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub components: Option<Vec<ComponentInputDto>>,
    #[serde(default)]
    pub is_published: Option<bool>,
    #[serde(default)]
    pub theme_id: Option<String>,
}
