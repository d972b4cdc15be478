//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the CMS, including API
//! endpoints, business logic, data access and the storage adapter. The backend uses Axum
//! as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Repositories converting stored documents to domain models
//! - **Storage Layer** (`storage/`) - Backend-agnostic document store over SeaORM
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (storage adapter, upload settings)
//! - **Startup** (`startup`) - Tracing, database, CORS and shutdown signal setup
//! - **Router** (`router`) - Axum route configuration
//! - **OpenAPI** (`openapi`) - Generated API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** converts DTOs to params, calls service
//! 3. **Service** executes business logic, orchestrates repository calls
//! 4. **Data** reads & writes documents through the storage adapter
//! 5. **Storage** translates documents to the active backend's rows
//! 6. **Controller** returns the service's DTO as the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod openapi;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod storage;
