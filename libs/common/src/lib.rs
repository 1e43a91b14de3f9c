//! Common library for the LifeSprints application
//!
//! This crate provides shared functionality used by the LifeSprints
//! services: PostgreSQL connectivity, migrations, and error handling.

pub mod database;
pub mod error;
