use std::str::FromStr;

use anyhow::{Context, Result};
use futures::try_join;
use chrono::NaiveDate;
use sqlx::{Executor, Sqlite, SqlitePool};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::model::{Employee, LeaveRecord};
use crate::schedule::Snapshot;

const SCHEMA: [&str; 7] = [
    r#"
    CREATE TABLE IF NOT EXISTS employees (
        id          TEXT PRIMARY KEY,
        name        TEXT NOT NULL,
        short_name  TEXT NOT NULL,
        position    TEXT NOT NULL DEFAULT 'Agent',
        work_type   TEXT NOT NULL DEFAULT 'Office',
        color       TEXT NOT NULL,
        created_at  TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS leaves (
        id           TEXT PRIMARY KEY,
        employee_id  TEXT NOT NULL,
        date         TEXT NOT NULL,
        week_start   TEXT NOT NULL,
        slot         INTEGER NOT NULL CHECK (slot BETWEEN 0 AND 6),
        created_at   TEXT NOT NULL
    )
    "#,
    "CREATE UNIQUE INDEX IF NOT EXISTS leaves_date_slot ON leaves (date, slot)",
    "CREATE UNIQUE INDEX IF NOT EXISTS leaves_date_employee ON leaves (date, employee_id)",
    "CREATE INDEX IF NOT EXISTS leaves_week_start ON leaves (week_start)",
    r#"
    CREATE TABLE IF NOT EXISTS overtime (
        id           TEXT PRIMARY KEY,
        employee_id  TEXT NOT NULL,
        date         TEXT NOT NULL,
        hours        REAL NOT NULL,
        created_at   TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS leave_types (
        id           TEXT PRIMARY KEY,
        employee_id  TEXT NOT NULL,
        date         TEXT NOT NULL,
        leave_type   TEXT NOT NULL,
        hours        REAL,
        created_at   TEXT NOT NULL
    )
    "#,
];

/// Opens the pool and makes sure the schema exists.
///
/// `sqlite::memory:` databases live per connection, so they are pinned to a
/// single connection that never expires.
pub async fn init_db(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("invalid DATABASE_URL {database_url}"))?
        .create_if_missing(true);

    let in_memory = database_url.contains(":memory:");
    let pool = SqlitePoolOptions::new()
        .max_connections(if in_memory { 1 } else { max_connections.max(1) })
        .idle_timeout(if in_memory { None } else { Some(std::time::Duration::from_secs(600)) })
        .max_lifetime(if in_memory { None } else { Some(std::time::Duration::from_secs(1800)) })
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    migrate(&pool).await?;
    info!(database_url, "Database ready");

    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .context("Failed to apply schema")?;
    }
    Ok(())
}

pub async fn fetch_employees<'e, E>(executor: E) -> Result<Vec<Employee>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, name, short_name, position, work_type, color, created_at
        FROM employees
        ORDER BY created_at, id
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn fetch_leaves<'e, E>(executor: E) -> Result<Vec<LeaveRecord>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, LeaveRecord>(
        r#"
        SELECT id, employee_id, date, week_start, slot, created_at
        FROM leaves
        ORDER BY date, slot
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn fetch_leaves_on<'e, E>(executor: E, date: NaiveDate) -> Result<Vec<LeaveRecord>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, LeaveRecord>(
        r#"
        SELECT id, employee_id, date, week_start, slot, created_at
        FROM leaves
        WHERE date = ?
        ORDER BY slot
        "#,
    )
    .bind(date)
    .fetch_all(executor)
    .await
}

/// Roster and leave records, fetched concurrently.
pub async fn load_snapshot(pool: &SqlitePool) -> Result<Snapshot, sqlx::Error> {
    let (employees, leaves) = try_join!(fetch_employees(pool), fetch_leaves(pool))?;
    Ok(Snapshot::new(employees, leaves))
}
