use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::model::{Employee, Position, WorkType};

/// Palette handed out round-robin to employees created without a color.
pub const DEFAULT_COLORS: [&str; 18] = [
    "#E91E63", "#2196F3", "#FF5722", "#9C27B0", "#00BCD4", "#4CAF50", "#CDDC39", "#FF9800",
    "#795548", "#607D8B", "#F44336", "#673AB7", "#3F51B5", "#009688", "#8BC34A", "#FFC107",
    "#FF5252", "#7C4DFF",
];

/// (id, name, short_name, position, color)
const DEFAULT_EMPLOYEES: [(&str, &str, &str, Position, &str); 12] = [
    ("ayca_cisem", "AYÇA ÇİSEM ÇOBAN", "AYÇA Ç.", Position::TeamLead, "#E91E63"),
    ("enis", "ENİS USLU", "ENİS U.", Position::TeamLead, "#2196F3"),
    ("onur", "ONUR KARAGÜLER", "ONUR K.", Position::TeamLead, "#FF5722"),
    ("busra", "BÜŞRA PARILTI", "BÜŞRA P.", Position::Agent, "#9C27B0"),
    ("sila", "SILA USTA", "SILA U.", Position::Agent, "#00BCD4"),
    ("nergiz", "NERGİZ OZĞAN", "NERGİZ O.", Position::Agent, "#4CAF50"),
    ("aysun", "AYSUN KUL", "AYSUN K.", Position::Agent, "#CDDC39"),
    ("elif", "ELİF ERKAN", "ELİF E.", Position::Agent, "#FF9800"),
    ("ebru", "EBRU FİDAN", "EBRU F.", Position::Agent, "#795548"),
    ("ayca_demir", "AYÇA DEMİR", "AYÇA D.", Position::Agent, "#607D8B"),
    ("kader", "KADER MÜREN", "KADER M.", Position::Agent, "#F44336"),
    ("rabia", "RABİA BATUK", "RABİA B.", Position::Agent, "#673AB7"),
];

pub fn default_color(existing: usize) -> &'static str {
    DEFAULT_COLORS[existing % DEFAULT_COLORS.len()]
}

pub fn default_roster() -> Vec<Employee> {
    DEFAULT_EMPLOYEES
        .iter()
        .map(|(id, name, short_name, position, color)| Employee {
            id: (*id).into(),
            name: name.to_string(),
            short_name: short_name.to_string(),
            position: *position,
            work_type: WorkType::Office,
            color: color.to_string(),
            created_at: Utc::now(),
        })
        .collect()
}

pub async fn insert_employee(pool: &SqlitePool, employee: &Employee) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO employees (id, name, short_name, position, work_type, color, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&employee.id)
    .bind(&employee.name)
    .bind(&employee.short_name)
    .bind(employee.position)
    .bind(employee.work_type)
    .bind(&employee.color)
    .bind(employee.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Inserts the default team when the roster is empty. Returns how many
/// employees were added.
pub async fn seed_default_employees(pool: &SqlitePool) -> Result<usize> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(0);
    }

    let roster = default_roster();
    for employee in &roster {
        insert_employee(pool, employee).await?;
    }

    info!(
        count = roster.len(),
        team_leads = roster.iter().filter(|e| e.is_team_lead()).count(),
        "Seeded default employees"
    );
    Ok(roster.len())
}
