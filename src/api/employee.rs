use crate::{
    db::fetch_employees,
    error::{ApiError, ApiResult},
    model::{Employee, EmployeeId, Position, WorkType},
    utils::seed::{default_color, insert_employee},
};
use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{debug, info};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "SILA USTA")]
    pub name: String,
    #[schema(example = "SILA U.")]
    pub short_name: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub work_type: WorkType,
    /// Picked from the default palette when omitted
    #[schema(example = "#00BCD4", nullable = true)]
    pub color: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub position: Option<Position>,
    pub work_type: Option<WorkType>,
    pub color: Option<String>,
}

impl UpdateEmployee {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.short_name.is_none()
            && self.position.is_none()
            && self.work_type.is_none()
            && self.color.is_none()
    }
}

fn non_blank(field: &str, value: &str) -> ApiResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::bad_request(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

async fn find_employee(pool: &SqlitePool, id: &EmployeeId) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, name, short_name, position, work_type, color, created_at
        FROM employees
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "Full roster", body = [Employee])
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> ApiResult<HttpResponse> {
    let employees = fetch_employees(pool.get_ref()).await?;
    debug!(count = employees.len(), "Fetched employees");
    Ok(HttpResponse::Ok().json(employees))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 200, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid payload", body = Object, example = json!({
            "detail": "name must not be empty"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();

    let color = match payload.color.as_deref().map(str::trim) {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => {
            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
                .fetch_one(pool.get_ref())
                .await?;
            default_color(count.max(0) as usize).to_string()
        }
    };

    let employee = Employee {
        id: EmployeeId::new(Uuid::new_v4().to_string()),
        name: non_blank("name", &payload.name)?,
        short_name: non_blank("short_name", &payload.short_name)?,
        position: payload.position,
        work_type: payload.work_type,
        color,
        created_at: Utc::now(),
    };

    insert_employee(pool.get_ref(), &employee).await?;
    info!(employee_id = %employee.id, "Employee created");

    Ok(HttpResponse::Ok().json(employee))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "No fields given", body = Object, example = json!({
            "detail": "No fields to update"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    body: web::Json<UpdateEmployee>,
) -> ApiResult<HttpResponse> {
    let employee_id = EmployeeId::new(path.into_inner());
    let update = body.into_inner();

    if update.is_empty() {
        return Err(ApiError::bad_request("No fields to update"));
    }

    let name = update.name.as_deref().map(|n| non_blank("name", n)).transpose()?;
    let short_name = update
        .short_name
        .as_deref()
        .map(|n| non_blank("short_name", n))
        .transpose()?;

    let result = sqlx::query(
        r#"
        UPDATE employees
        SET name       = COALESCE(?, name),
            short_name = COALESCE(?, short_name),
            position   = COALESCE(?, position),
            work_type  = COALESCE(?, work_type),
            color      = COALESCE(?, color)
        WHERE id = ?
        "#,
    )
    .bind(name)
    .bind(short_name)
    .bind(update.position)
    .bind(update.work_type)
    .bind(update.color)
    .bind(&employee_id)
    .execute(pool.get_ref())
    .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("Employee not found"));
    }

    let employee = find_employee(pool.get_ref(), &employee_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Employee not found"))?;

    info!(employee_id = %employee_id, "Employee updated");
    Ok(HttpResponse::Ok().json(employee))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Employee deleted"
        })),
        (status = 400, description = "Employee still has leave records", body = Object, example = json!({
            "detail": "Employee has leave records. Delete them first."
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let employee_id = EmployeeId::new(path.into_inner());

    let leave_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leaves WHERE employee_id = ?")
        .bind(&employee_id)
        .fetch_one(pool.get_ref())
        .await?;

    if leave_count > 0 {
        return Err(ApiError::bad_request(
            "Employee has leave records. Delete them first.",
        ));
    }

    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(&employee_id)
        .execute(pool.get_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("Employee not found"));
    }

    info!(employee_id = %employee_id, "Employee deleted");
    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted"
    })))
}
