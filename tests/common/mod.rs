//! Shared helpers for integration tests.

#![allow(dead_code)]

use sea_orm::ConnectOptions;

use user_directory::domain::CreateUser;
use user_directory::infra::Database;

/// Fresh in-memory SQLite database with migrations applied.
///
/// A single pooled connection keeps every query on the same database.
pub async fn memory_database() -> Database {
    Database::connect_with(memory_options())
        .await
        .expect("in-memory database should start")
}

/// Fresh in-memory SQLite database with no schema at all.
pub async fn empty_memory_database() -> Database {
    Database::connect_without_migrations(memory_options())
        .await
        .expect("in-memory database should start")
}

fn memory_options() -> ConnectOptions {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    options
}

pub fn new_user(email: &str) -> CreateUser {
    CreateUser {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        phone_number: None,
        date_of_birth: None,
        is_active: true,
    }
}
