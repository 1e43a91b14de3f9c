//! Stories service: a thin HTTP layer over PostgreSQL stored functions
//!
//! Users own yearly "stories" (goals/tasks); all writes and aggregations
//! run inside the database, and this crate only validates input, binds
//! parameters, and maps results.

pub mod error;
pub mod models;
pub mod procedures;
pub mod routes;
pub mod state;
pub mod validation;

/// Embedded schema and stored-function migrations
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
