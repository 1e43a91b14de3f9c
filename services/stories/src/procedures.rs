//! Stored-procedure adapter for database operations
//!
//! Every write and aggregation goes through a PostgreSQL stored function;
//! this adapter only binds parameters, invokes one function per call, and
//! maps the scalar or row-set result. Failures from the database
//! (constraint violations, connection errors) propagate unchanged — there
//! is no retry and no local recovery.

use anyhow::Result;
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::models::{CreateStoryRequest, CreateUserRequest, StorySummary, YearStats};

/// Adapter over the `sp_*` stored functions
#[derive(Clone)]
pub struct StoredProcedureService {
    pool: PgPool,
}

impl StoredProcedureService {
    /// Create a new adapter over the given pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a user, returning the generated id
    ///
    /// A duplicate email surfaces as the database's unique-violation error.
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<Uuid> {
        info!("Creating user: {}", request.email);

        let user_id: Uuid = sqlx::query_scalar("SELECT sp_create_user($1, $2)")
            .bind(&request.email)
            .bind(&request.display_name)
            .fetch_one(&self.pool)
            .await?;

        Ok(user_id)
    }

    /// Create a story for an existing user, returning the generated id
    ///
    /// An unknown user surfaces as the database's foreign-key error.
    pub async fn create_story(&self, request: &CreateStoryRequest) -> Result<i32> {
        info!(
            "Creating story for user {} in year {}",
            request.user_id, request.year
        );

        let story_id: i32 =
            sqlx::query_scalar("SELECT sp_create_story($1, $2, $3, $4, $5, $6, $7)")
                .bind(request.user_id)
                .bind(&request.title)
                .bind(request.description.as_deref())
                .bind(request.year)
                .bind(request.priority)
                .bind(request.estimated_hours)
                .bind(request.due_date)
                .fetch_one(&self.pool)
                .await?;

        Ok(story_id)
    }

    /// Flip a story's completion state, returning the state after the toggle
    ///
    /// When `user_id` is given the database verifies ownership and raises
    /// on a mismatch; the error propagates to the caller.
    pub async fn toggle_story_completion(
        &self,
        story_id: i32,
        user_id: Option<Uuid>,
    ) -> Result<bool> {
        info!("Toggling completion for story {}", story_id);

        let is_completed: bool = sqlx::query_scalar("SELECT sp_toggle_story_completion($1, $2)")
            .bind(story_id)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(is_completed)
    }

    /// List a user's stories for one year, ordered by creation time
    pub async fn get_user_stories_by_year(
        &self,
        user_id: Uuid,
        year: i32,
    ) -> Result<Vec<StorySummary>> {
        let rows = sqlx::query("SELECT * FROM sp_get_user_stories_by_year($1, $2)")
            .bind(user_id)
            .bind(year)
            .fetch_all(&self.pool)
            .await?;

        let stories = rows
            .into_iter()
            .map(|row| StorySummary {
                id: row.get("id"),
                user_id: row.get("user_id"),
                title: row.get("title"),
                description: row.get("description"),
                year: row.get("year"),
                is_completed: row.get("is_completed"),
                priority: row.get("priority"),
                estimated_hours: row.get("estimated_hours"),
                actual_hours: row.get("actual_hours"),
                due_date: row.get("due_date"),
                completed_at: row.get("completed_at"),
                created_at: row.get("created_at"),
                updated_at: row.get("updated_at"),
            })
            .collect();

        Ok(stories)
    }

    /// Aggregate statistics for a user's year
    ///
    /// Always yields one row; a year with no stories is the zero-valued
    /// aggregate, not an error.
    pub async fn get_user_year_stats(&self, user_id: Uuid, year: i32) -> Result<YearStats> {
        let row = sqlx::query("SELECT * FROM sp_get_user_year_stats($1, $2)")
            .bind(user_id)
            .bind(year)
            .fetch_one(&self.pool)
            .await?;

        let stats = YearStats {
            year: row.get("year"),
            total_stories: row.get("total_stories"),
            completed_stories: row.get("completed_stories"),
            completion_percentage: row.get::<Decimal, _>("completion_percentage"),
            total_estimated_hours: row.get::<Decimal, _>("total_estimated_hours"),
            total_actual_hours: row.get::<Decimal, _>("total_actual_hours"),
        };

        Ok(stats)
    }
}
