use crate::{
    error::{ApiError, ApiResult},
    model::{EmployeeId, OvertimeRecord},
};
use actix_web::{HttpResponse, web};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema)]
pub struct CreateOvertime {
    #[schema(example = "busra", value_type = String)]
    pub employee_id: EmployeeId,
    #[schema(example = "2026-01-07", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = 1.5)]
    pub hours: f64,
}

/// Rejects references to employees missing from the roster.
pub(crate) async fn ensure_employee(pool: &SqlitePool, employee_id: &EmployeeId) -> ApiResult<()> {
    let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE id = ?")
        .bind(employee_id)
        .fetch_one(pool)
        .await?;

    if exists == 0 {
        return Err(ApiError::bad_request(format!(
            "Unknown employee id {employee_id}"
        )));
    }
    Ok(())
}

pub(crate) fn ensure_positive_hours(hours: f64) -> ApiResult<()> {
    if !hours.is_finite() || hours <= 0.0 {
        return Err(ApiError::bad_request("hours must be a positive number"));
    }
    Ok(())
}

/// List overtime entries
#[utoipa::path(
    get,
    path = "/api/overtime",
    responses(
        (status = 200, description = "Overtime entries", body = [OvertimeRecord])
    ),
    tag = "Overtime"
)]
pub async fn list_overtime(pool: web::Data<SqlitePool>) -> ApiResult<HttpResponse> {
    let entries = sqlx::query_as::<_, OvertimeRecord>(
        r#"
        SELECT id, employee_id, date, hours, created_at
        FROM overtime
        ORDER BY date DESC, created_at DESC
        "#,
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(entries))
}

/// Record overtime
#[utoipa::path(
    post,
    path = "/api/overtime",
    request_body = CreateOvertime,
    responses(
        (status = 200, description = "Overtime recorded", body = OvertimeRecord),
        (status = 400, description = "Unknown employee or invalid hours", body = Object, example = json!({
            "detail": "hours must be a positive number"
        }))
    ),
    tag = "Overtime"
)]
pub async fn create_overtime(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateOvertime>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();

    ensure_positive_hours(payload.hours)?;
    ensure_employee(pool.get_ref(), &payload.employee_id).await?;

    let record = OvertimeRecord {
        id: Uuid::new_v4().to_string(),
        employee_id: payload.employee_id,
        date: payload.date,
        hours: payload.hours,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO overtime (id, employee_id, date, hours, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.id)
    .bind(&record.employee_id)
    .bind(record.date)
    .bind(record.hours)
    .bind(record.created_at)
    .execute(pool.get_ref())
    .await?;

    info!(
        overtime_id = %record.id,
        employee_id = %record.employee_id,
        hours = %record.hours_label(),
        "Overtime recorded"
    );
    Ok(HttpResponse::Ok().json(record))
}

/// Delete an overtime entry
#[utoipa::path(
    delete,
    path = "/api/overtime/{overtime_id}",
    params(
        ("overtime_id" = String, Path, description = "ID of the overtime entry")
    ),
    responses(
        (status = 200, description = "Overtime deleted", body = Object, example = json!({
            "message": "Overtime deleted"
        })),
        (status = 404, description = "Overtime entry not found")
    ),
    tag = "Overtime"
)]
pub async fn delete_overtime(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let overtime_id = path.into_inner();

    let result = sqlx::query("DELETE FROM overtime WHERE id = ?")
        .bind(&overtime_id)
        .execute(pool.get_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("Overtime entry not found"));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Overtime deleted"
    })))
}
