//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Friendship and user rules on top of the repository
//! - **Data Layer** (`data/`) - The `UserRepository` capability and its SeaORM implementation
//! - **Model Layer** (`model/`) - Validated domain models (`User`, statuses)
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session identity, request logging, debug error pages
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (repository, debug flag)
//! - **Startup** (`startup`) - Tracing, database and session initialization
//! - **Router** (`router`) - Route table, fallbacks and the `UriRouter` capability
//! - **Doc** (`doc`) - OpenAPI description served in debug mode
//!
//! # Request Flow
//!
//! 1. **Middleware** logs the request and loads the session
//! 2. **Router** dispatches the POST to a controller, or to the `Invalid URI.` fallback
//! 3. **Controller** extracts form parameters and the `CurrentUser`, calls a service
//! 4. **Service** applies friendship rules and calls the repository
//! 5. **Controller** converts the domain model into the `{status, message, ...}` envelope
//! 6. Any `AppError` on the way is turned into the error envelope by its `IntoResponse`

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
