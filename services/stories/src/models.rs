//! Request and response payloads for the stories service

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request for creating a user
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub display_name: String,
}

/// Request for creating a story
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoryRequest {
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub year: i32,
    #[serde(default)]
    pub priority: i32,
    pub estimated_hours: Option<Decimal>,
    pub due_date: Option<DateTime<Utc>>,
}

/// Query string for the toggle endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleQuery {
    pub user_id: Option<Uuid>,
}

/// One story row as returned by the year-scoped listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorySummary {
    pub id: i32,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub year: i32,
    pub is_completed: bool,
    pub priority: i32,
    pub estimated_hours: Option<Decimal>,
    pub actual_hours: Option<Decimal>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregate statistics for one user and year
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearStats {
    pub year: i32,
    pub total_stories: i64,
    pub completed_stories: i64,
    pub completion_percentage: Decimal,
    pub total_estimated_hours: Decimal,
    pub total_actual_hours: Decimal,
}
