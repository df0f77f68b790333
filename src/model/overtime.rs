use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::employee::EmployeeId;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct OvertimeRecord {
    pub id: String,

    #[schema(example = "busra", value_type = String)]
    pub employee_id: EmployeeId,

    #[schema(example = "2026-01-07", format = "date", value_type = String)]
    pub date: NaiveDate,

    #[schema(example = 1.5)]
    pub hours: f64,

    #[schema(example = "2026-01-01T00:00:00Z", format = "date-time", value_type = String)]
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl OvertimeRecord {
    /// Hours as shown in the overtime table, one decimal place.
    pub fn hours_label(&self) -> String {
        format!("{:.1}", self.hours)
    }
}
