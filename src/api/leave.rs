use crate::{
    config::Config,
    db::{fetch_employees, fetch_leaves_on},
    error::{ApiError, ApiResult},
    model::{EmployeeId, LeaveRecord},
    schedule::{LeaveBoard, ScheduleError, board::day_class},
    utils::calendar_cache::week_of,
};
use actix_web::{HttpResponse, web};
use chrono::{Local, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{debug, info, warn};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Deserialize, IntoParams)]
pub struct LeaveFilter {
    /// Only leaves of the week starting on this Monday
    #[param(value_type = Option<String>, format = "date", example = "2026-01-05")]
    pub week_start: Option<NaiveDate>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateLeave {
    #[schema(example = "sila", value_type = String)]
    pub employee_id: EmployeeId,
    #[schema(example = "2026-01-06", format = "date", value_type = String)]
    pub date: NaiveDate,
    /// Defaults to the Monday of `date`
    #[schema(example = "2026-01-05", format = "date", value_type = String, nullable = true)]
    pub week_start: Option<NaiveDate>,
    /// Defaults to the lowest free lane
    #[schema(example = 0, nullable = true)]
    pub slot: Option<u8>,
}

/// List leave records
#[utoipa::path(
    get,
    path = "/api/leaves",
    params(LeaveFilter),
    responses(
        (status = 200, description = "Leave records", body = [LeaveRecord])
    ),
    tag = "Leave"
)]
pub async fn list_leaves(
    pool: web::Data<SqlitePool>,
    query: web::Query<LeaveFilter>,
) -> ApiResult<HttpResponse> {
    let leaves = sqlx::query_as::<_, LeaveRecord>(
        r#"
        SELECT id, employee_id, date, week_start, slot, created_at
        FROM leaves
        WHERE (?1 IS NULL OR week_start = ?1)
        ORDER BY date, slot
        "#,
    )
    .bind(query.week_start)
    .fetch_all(pool.get_ref())
    .await?;

    debug!(count = leaves.len(), week_start = ?query.week_start, "Fetched leaves");
    Ok(HttpResponse::Ok().json(leaves))
}

/// Assign a leave slot
#[utoipa::path(
    post,
    path = "/api/leaves",
    request_body = CreateLeave,
    responses(
        (status = 200, description = "Leave recorded", body = LeaveRecord),
        (status = 400, description = "Slot unavailable, double booking or a team rule", body = Object, example = json!({
            "detail": "No leave can be added on 2026-01-06: all 7 slots are taken"
        }))
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    payload: web::Json<CreateLeave>,
) -> ApiResult<HttpResponse> {
    let CreateLeave {
        employee_id,
        date,
        week_start,
        slot,
    } = payload.into_inner();

    let monday = week_of(date, config.locale).await?.start;
    if let Some(given) = week_start {
        if given != monday {
            return Err(ScheduleError::WeekStartMismatch {
                date,
                week_start: given,
            }
            .into());
        }
    }

    let mut tx = pool.begin().await?;
    let employees = fetch_employees(&mut *tx).await?;
    let day_leaves = fetch_leaves_on(&mut *tx, date).await?;
    let board = LeaveBoard::new(&employees, &day_leaves);

    let slot = board
        .check_assignment(&employee_id, date, slot)
        .and_then(|slot| {
            config
                .leave_policy()
                .check(&board, &employee_id, date, Local::now().date_naive())
                .map(|_| slot)
        })
        .map_err(|e| {
            warn!(employee_id = %employee_id, %date, error = %e, "Leave rejected");
            ApiError::from(e)
        })?;

    let record = LeaveRecord {
        id: Uuid::new_v4().to_string(),
        employee_id,
        date,
        week_start: monday,
        slot,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO leaves (id, employee_id, date, week_start, slot, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.id)
    .bind(&record.employee_id)
    .bind(record.date)
    .bind(record.week_start)
    .bind(record.slot)
    .bind(record.created_at)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(
        leave_id = %record.id,
        employee_id = %record.employee_id,
        date = %record.date,
        slot = record.slot,
        day_class = ?day_class(record.date),
        "Leave recorded"
    );
    Ok(HttpResponse::Ok().json(record))
}

/// Remove a leave slot
#[utoipa::path(
    delete,
    path = "/api/leaves/{leave_id}",
    params(
        ("leave_id" = String, Path, description = "ID of the leave record")
    ),
    responses(
        (status = 200, description = "Leave deleted", body = Object, example = json!({
            "message": "Leave deleted"
        })),
        (status = 404, description = "Leave record not found", body = Object, example = json!({
            "detail": "Leave record not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn delete_leave(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let leave_id = path.into_inner();

    let result = sqlx::query("DELETE FROM leaves WHERE id = ?")
        .bind(&leave_id)
        .execute(pool.get_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("Leave record not found"));
    }

    info!(leave_id = %leave_id, "Leave deleted");
    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave deleted"
    })))
}
