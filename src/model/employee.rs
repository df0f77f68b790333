use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Canonical employee identifier.
///
/// Leave, overtime and leave-type records reference employees through this
/// type, so a lookup is a strict string comparison and never depends on how
/// the id was spelled on the wire (`1` vs `"1"`).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EmployeeId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// Accept numeric ids as well, older clients sent them unquoted.
impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
            Uint(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => EmployeeId::new(s),
            Raw::Int(n) => EmployeeId(n.to_string()),
            Raw::Uint(n) => EmployeeId(n.to_string()),
        })
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
pub enum Position {
    #[serde(rename = "TL")]
    #[sqlx(rename = "TL")]
    #[strum(serialize = "TL")]
    TeamLead,
    #[default]
    Agent,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
pub enum WorkType {
    #[default]
    Office,
    HomeOffice,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": "enis",
        "name": "ENİS USLU",
        "short_name": "ENİS U.",
        "position": "TL",
        "work_type": "Office",
        "color": "#2196F3",
        "created_at": "2026-01-01T00:00:00Z"
    })
)]
pub struct Employee {
    #[schema(example = "enis", value_type = String)]
    pub id: EmployeeId,

    #[schema(example = "ENİS USLU")]
    pub name: String,

    #[schema(example = "ENİS U.")]
    pub short_name: String,

    #[serde(default)]
    pub position: Position,

    #[serde(default)]
    pub work_type: WorkType,

    #[schema(example = "#2196F3")]
    pub color: String,

    #[schema(example = "2026-01-01T00:00:00Z", format = "date-time", value_type = String)]
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Office staff are the ones who eat at the office; home-office staff are
    /// left out of meal counts.
    pub fn is_office(&self) -> bool {
        self.work_type == WorkType::Office
    }

    pub fn is_team_lead(&self) -> bool {
        self.position == Position::TeamLead
    }
}
