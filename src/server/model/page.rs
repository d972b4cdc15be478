//! Page & component domain models and operation parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    model::page::{ComponentDto, ComponentInputDto, CreatePageDto, PageDto, UpdatePageDto},
    server::{
        error::internal::InternalError,
        model::{decode_document, encode_document, timestamp},
        storage::Document,
    },
};

const ENTITY: &str = "page";

/// One typed visual block within a page.
///
/// The `component_type` is an opaque tag and isn't checked against the widget catalog.
/// `order` is advisory; the position in the page's component list is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(default)]
    pub props: Map<String, Value>,
    #[serde(default)]
    pub order: i32,
}

impl Component {
    /// Creates a component with a generated id.
    pub fn new(component_type: impl Into<String>, props: Map<String, Value>, order: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            component_type: component_type.into(),
            props,
            order,
        }
    }

    /// Normalizes a submitted component, generating its id when omitted.
    pub fn from_input(input: ComponentInputDto) -> Self {
        Self {
            id: input.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            component_type: input.component_type,
            props: input.props,
            order: input.order,
        }
    }

    pub fn into_dto(self) -> ComponentDto {
        ComponentDto {
            id: self.id,
            component_type: self.component_type,
            props: self.props,
            order: self.order,
        }
    }
}

/// A page of a school's website made of an ordered list of components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub school_id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub theme_id: Option<String>,
    #[serde(with = "crate::server::model::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::server::model::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// Converts a stored document into a page.
    ///
    /// # Returns
    /// - `Ok(Page)` - Decoded page with structured components
    /// - `Err(InternalError::DecodeDocument)` - Document is missing fields or has wrong types
    pub fn from_document(document: Document) -> Result<Self, InternalError> {
        decode_document(ENTITY, document)
    }

    pub fn to_document(&self) -> Result<Document, InternalError> {
        encode_document(ENTITY, self)
    }

    pub fn into_dto(self) -> PageDto {
        PageDto {
            id: self.id,
            school_id: self.school_id,
            name: self.name,
            slug: self.slug,
            components: self
                .components
                .into_iter()
                .map(Component::into_dto)
                .collect(),
            is_published: self.is_published,
            theme_id: self.theme_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a page.
#[derive(Debug, Clone)]
pub struct CreatePageParam {
    /// Fixed id to use instead of a generated UUID, used by the demo seed.
    pub id: Option<String>,
    pub school_id: String,
    pub name: String,
    pub slug: String,
    pub components: Vec<Component>,
    pub is_published: bool,
    pub theme_id: Option<String>,
}

impl CreatePageParam {
    /// Converts the request into create parameters; new pages start unpublished.
    pub fn from_dto(dto: CreatePageDto) -> Self {
        Self {
            id: None,
            school_id: dto.school_id,
            name: dto.name,
            slug: dto.slug,
            components: dto.components.into_iter().map(Component::from_input).collect(),
            is_published: false,
            theme_id: dto.theme_id,
        }
    }

    /// Builds the page to store with both timestamps set to `now`.
    pub fn into_page(self, now: DateTime<Utc>) -> Page {
        Page {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            school_id: self.school_id,
            name: self.name,
            slug: self.slug,
            components: self.components,
            is_published: self.is_published,
            theme_id: self.theme_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial page update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdatePageParam {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub components: Option<Vec<Component>>,
    pub is_published: Option<bool>,
    pub theme_id: Option<String>,
}

impl UpdatePageParam {
    pub fn from_dto(dto: UpdatePageDto) -> Self {
        Self {
            name: dto.name,
            slug: dto.slug,
            components: dto
                .components
                .map(|components| components.into_iter().map(Component::from_input).collect()),
            is_published: dto.is_published,
            theme_id: dto.theme_id,
        }
    }

    /// Builds the storage patch holding the supplied fields plus the refreshed `updated_at`.
    ///
    /// # Arguments
    /// - `updated_at` - Modification timestamp to record
    ///
    /// # Returns
    /// - `Ok(Document)` - Patch to merge into the stored page
    /// - `Err(InternalError::EncodeDocument)` - Components failed to serialize
    pub fn into_patch(self, updated_at: DateTime<Utc>) -> Result<Document, InternalError> {
        let mut patch = Document::new();

        if let Some(name) = self.name {
            patch.insert("name".to_string(), Value::String(name));
        }
        if let Some(slug) = self.slug {
            patch.insert("slug".to_string(), Value::String(slug));
        }
        if let Some(components) = self.components {
            let components = serde_json::to_value(components)
                .map_err(|source| InternalError::EncodeDocument {
                    entity: ENTITY,
                    source,
                })?;
            patch.insert("components".to_string(), components);
        }
        if let Some(is_published) = self.is_published {
            patch.insert("is_published".to_string(), Value::Bool(is_published));
        }
        if let Some(theme_id) = self.theme_id {
            patch.insert("theme_id".to_string(), Value::String(theme_id));
        }

        patch.insert(
            "updated_at".to_string(),
            Value::String(timestamp::format(&updated_at)),
        );

        Ok(patch)
    }
}
