//! Demo user returned by the authentication stub.

use crate::model::auth::UserDto;

pub const DEMO_USER_ID: &str = "demo-user-1";
pub const DEMO_USER_EMAIL: &str = "admin@demo.com";
pub const DEMO_USER_NAME: &str = "Demo Admin";
pub const DEMO_USER_ROLE: &str = "admin";

/// Authenticated user as seen by the admin front end.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl User {
    /// The fixed demo administrator, reported under the provided email.
    pub fn demo(email: impl Into<String>) -> Self {
        Self {
            id: DEMO_USER_ID.to_string(),
            email: email.into(),
            name: DEMO_USER_NAME.to_string(),
            role: DEMO_USER_ROLE.to_string(),
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
        }
    }
}
