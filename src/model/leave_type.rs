use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::employee::EmployeeId;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ToSchema,
    sqlx::Type,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveKind {
    Unpaid,
    Annual,
    /// Time off in lieu of overtime; carries an hour count.
    Compensatory,
}

impl LeaveKind {
    pub fn requires_hours(&self) -> bool {
        matches!(self, LeaveKind::Compensatory)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct LeaveTypeRecord {
    pub id: String,

    #[schema(example = "elif", value_type = String)]
    pub employee_id: EmployeeId,

    #[schema(example = "2026-02-02", format = "date", value_type = String)]
    pub date: NaiveDate,

    #[schema(example = "compensatory")]
    pub leave_type: LeaveKind,

    /// Only meaningful for compensatory leave
    #[schema(example = 4.0, nullable = true)]
    pub hours: Option<f64>,

    #[schema(example = "2026-01-01T00:00:00Z", format = "date-time", value_type = String)]
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}
