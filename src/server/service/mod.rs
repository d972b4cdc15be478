//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Not-found handling, default values and the demo seed guard
//! - **Orchestration**: Coordinating multiple repository calls, such as the school → page
//!   cascade on delete
//! - **Static Data**: Serving the widget & theme catalogs
//! - **Files**: Storing uploaded images
//!
//! Services return DTOs ready for the controllers to serialize.

pub mod auth;
pub mod catalog;
pub mod page;
pub mod school;
pub mod seed;
pub mod upload;

#[cfg(test)]
mod test;

/// Maximum number of records returned by list endpoints.
pub const LIST_LIMIT: u64 = 100;
