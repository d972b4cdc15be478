//! HTTP request handlers.
//!
//! One handler per resource & action. Handlers extract the request, convert DTOs into
//! operation parameters, call the matching service and serialize its result. Each handler
//! carries a `utoipa::path` annotation collected into the OpenAPI document.

pub mod auth;
pub mod catalog;
pub mod page;
pub mod root;
pub mod school;
pub mod seed;
pub mod upload;

#[cfg(test)]
mod test;
