use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::employee::EmployeeId;

/// One occupied lane of a calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": "5b0c5b5e-4a53-4d2b-9a5f-1f0f4a3c2d11",
        "employee_id": "sila",
        "date": "2026-01-06",
        "week_start": "2026-01-05",
        "slot": 0,
        "created_at": "2026-01-01T00:00:00Z"
    })
)]
pub struct LeaveRecord {
    pub id: String,

    #[schema(example = "sila", value_type = String)]
    pub employee_id: EmployeeId,

    #[schema(example = "2026-01-06", format = "date", value_type = String)]
    pub date: NaiveDate,

    /// Monday of the week containing `date`
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub week_start: NaiveDate,

    /// Lane index within the day, 0..=6
    #[schema(example = 0)]
    pub slot: u8,

    #[schema(example = "2026-01-01T00:00:00Z", format = "date-time", value_type = String)]
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}
