//! School domain model and operation parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    model::school::{CreateSchoolDto, SchoolDto},
    server::{
        error::internal::InternalError,
        model::{decode_document, encode_document},
        storage::Document,
    },
};

pub const DEFAULT_PRIMARY_COLOR: &str = "#1D4ED8";
pub const DEFAULT_SECONDARY_COLOR: &str = "#FBBF24";
pub const DEFAULT_THEME_ID: &str = "default";

const ENTITY: &str = "school";

/// A school owning a set of pages.
///
/// Serializes into the stored document shape, with `created_at` as an RFC 3339 string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub theme_id: String,
    #[serde(with = "crate::server::model::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl School {
    /// Converts a stored document into a school.
    ///
    /// # Returns
    /// - `Ok(School)` - Decoded school
    /// - `Err(InternalError::DecodeDocument)` - Document is missing fields or has wrong types
    pub fn from_document(document: Document) -> Result<Self, InternalError> {
        decode_document(ENTITY, document)
    }

    /// Converts the school into its stored document shape.
    pub fn to_document(&self) -> Result<Document, InternalError> {
        encode_document(ENTITY, self)
    }

    pub fn into_dto(self) -> SchoolDto {
        SchoolDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            logo_url: self.logo_url,
            primary_color: self.primary_color,
            secondary_color: self.secondary_color,
            theme_id: self.theme_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a school.
///
/// Omitted optional fields fall back to the default palette & theme.
#[derive(Debug, Clone)]
pub struct CreateSchoolParam {
    /// Fixed id to use instead of a generated UUID, used by the demo seed.
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub theme_id: Option<String>,
}

impl CreateSchoolParam {
    pub fn from_dto(dto: CreateSchoolDto) -> Self {
        Self {
            id: None,
            name: dto.name,
            slug: dto.slug,
            logo_url: dto.logo_url,
            primary_color: dto.primary_color,
            secondary_color: dto.secondary_color,
            theme_id: dto.theme_id,
        }
    }

    /// Builds the school to store, filling server-controlled fields and defaults.
    ///
    /// # Arguments
    /// - `created_at` - Creation timestamp to record
    pub fn into_school(self, created_at: DateTime<Utc>) -> School {
        School {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name,
            slug: self.slug,
            logo_url: self.logo_url,
            primary_color: self
                .primary_color
                .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string()),
            secondary_color: self
                .secondary_color
                .unwrap_or_else(|| DEFAULT_SECONDARY_COLOR.to_string()),
            theme_id: self.theme_id.unwrap_or_else(|| DEFAULT_THEME_ID.to_string()),
            created_at,
        }
    }
}
