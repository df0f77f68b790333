use crate::{
    api::overtime::{ensure_employee, ensure_positive_hours},
    error::{ApiError, ApiResult},
    model::{EmployeeId, LeaveKind, LeaveTypeRecord},
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
pub struct CreateLeaveType {
    #[schema(example = "elif", value_type = String)]
    pub employee_id: EmployeeId,
    #[schema(example = "2026-02-02", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "compensatory")]
    pub leave_type: LeaveKind,
    /// Required for compensatory leave, ignored otherwise
    #[schema(example = 4.0, nullable = true)]
    pub hours: Option<f64>,
}

/// List leave-type entries
#[utoipa::path(
    get,
    path = "/api/leave-types",
    responses(
        (status = 200, description = "Leave-type entries", body = [LeaveTypeRecord])
    ),
    tag = "Leave type"
)]
pub async fn list_leave_types(pool: web::Data<SqlitePool>) -> ApiResult<HttpResponse> {
    let entries = sqlx::query_as::<_, LeaveTypeRecord>(
        r#"
        SELECT id, employee_id, date, leave_type, hours, created_at
        FROM leave_types
        ORDER BY date DESC, created_at DESC
        "#,
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(entries))
}

/// Record a typed leave (unpaid, annual, compensatory)
#[utoipa::path(
    post,
    path = "/api/leave-types",
    request_body = CreateLeaveType,
    responses(
        (status = 200, description = "Leave type recorded", body = LeaveTypeRecord),
        (status = 400, description = "Unknown employee or missing hours", body = Object, example = json!({
            "detail": "Compensatory leave requires hours"
        }))
    ),
    tag = "Leave type"
)]
pub async fn create_leave_type(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateLeaveType>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();

    let hours = if payload.leave_type.requires_hours() {
        let hours = payload
            .hours
            .ok_or_else(|| ApiError::bad_request("Compensatory leave requires hours"))?;
        ensure_positive_hours(hours)?;
        Some(hours)
    } else {
        None
    };

    ensure_employee(pool.get_ref(), &payload.employee_id).await?;

    let record = LeaveTypeRecord {
        id: Uuid::new_v4().to_string(),
        employee_id: payload.employee_id,
        date: payload.date,
        leave_type: payload.leave_type,
        hours,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO leave_types (id, employee_id, date, leave_type, hours, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.id)
    .bind(&record.employee_id)
    .bind(record.date)
    .bind(record.leave_type)
    .bind(record.hours)
    .bind(record.created_at)
    .execute(pool.get_ref())
    .await?;

    info!(
        leave_type_id = %record.id,
        employee_id = %record.employee_id,
        leave_type = %record.leave_type,
        "Leave type recorded"
    );
    Ok(HttpResponse::Ok().json(record))
}

/// Delete a leave-type entry
#[utoipa::path(
    delete,
    path = "/api/leave-types/{leave_type_id}",
    params(
        ("leave_type_id" = String, Path, description = "ID of the leave-type entry")
    ),
    responses(
        (status = 200, description = "Leave type deleted", body = Object, example = json!({
            "message": "Leave type deleted"
        })),
        (status = 404, description = "Leave-type entry not found")
    ),
    tag = "Leave type"
)]
pub async fn delete_leave_type(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let leave_type_id = path.into_inner();

    let result = sqlx::query("DELETE FROM leave_types WHERE id = ?")
        .bind(&leave_type_id)
        .execute(pool.get_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("Leave-type entry not found"));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave type deleted"
    })))
}
