//! Application state shared across handlers

use sqlx::PgPool;

use crate::procedures::StoredProcedureService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub procedures: StoredProcedureService,
}
