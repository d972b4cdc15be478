//! Request and response DTOs for the HTTP API.
//!
//! These types define the JSON shapes exchanged with the website builder front end. Request
//! DTOs drop unrecognized input fields: serde ignores unknown keys and no DTO opts into
//! `deny_unknown_fields`.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod page;
pub mod school;
pub mod seed;
pub mod upload;
