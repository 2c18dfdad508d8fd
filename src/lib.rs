//! User Directory - user records with request location history
//!
//! A REST API for creating, reading, updating and soft-deleting users.
//! Every create and update also records, on a best-effort basis, where
//! the request came from, using an external IP geolocation provider.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities and field validation rules
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, geolocation provider)
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserLocation};
pub use errors::{AppError, AppResult};
