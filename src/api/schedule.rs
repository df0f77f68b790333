//! Read models computed from the leave board: calendar weeks, the weekly slot
//! grid and the meal list.

use crate::{
    config::Config,
    db::load_snapshot,
    error::ApiResult,
    schedule::{
        DayBoard, MealWeek, ScheduleError, Snapshot, Week,
        calendar::{expand_week, weeks_of_month},
    },
    utils::calendar_cache::{week_of, weeks_of_year},
};
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct CalendarQuery {
    /// Defaults to the configured calendar year
    #[param(example = 2026)]
    pub year: Option<i32>,
    /// 0-based month; when given only weeks touching that month are returned
    #[param(example = 0)]
    pub month: Option<u32>,
}

#[derive(Serialize, ToSchema)]
pub struct WeekBoardResponse {
    pub week: Week,
    pub days: Vec<DayBoard>,
}

#[derive(Serialize, ToSchema)]
pub struct MonthlyMealsResponse {
    pub year: i32,
    /// 0-based month
    pub month: u32,
    pub weeks: Vec<MealWeek>,
    /// Each date of the month counted once
    pub monthly_total: usize,
}

#[derive(Deserialize, ToSchema)]
pub struct PreviewRequest {
    /// Anything but an array is treated as an empty roster
    #[schema(value_type = Object)]
    #[serde(default)]
    pub employees: Value,
    /// Anything but an array is treated as no leaves
    #[schema(value_type = Object)]
    #[serde(default)]
    pub leaves: Value,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub week_start: NaiveDate,
}

#[derive(Serialize, ToSchema)]
pub struct PreviewResponse {
    pub board: WeekBoardResponse,
    pub meals: MealWeek,
}

fn resolve_month(config: &Config, query: &CalendarQuery) -> Result<(i32, Option<u32>), ScheduleError> {
    let year = query.year.unwrap_or(config.calendar_year);
    match query.month {
        Some(m) if m > 11 => Err(ScheduleError::InvalidMonth(m)),
        month => Ok((year, month)),
    }
}

fn board_response(snapshot: &Snapshot, week: Week, config: &Config) -> WeekBoardResponse {
    let days = snapshot.board().week_board(&week, config.locale);
    WeekBoardResponse { week, days }
}

/// Weeks of a year
#[utoipa::path(
    get,
    path = "/api/calendar/weeks",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Monday-anchored weeks", body = [Week]),
        (status = 400, description = "Invalid year or month")
    ),
    tag = "Calendar"
)]
pub async fn list_weeks(
    config: web::Data<Config>,
    query: web::Query<CalendarQuery>,
) -> ApiResult<HttpResponse> {
    let (year, month) = resolve_month(&config, &query)?;
    let weeks = weeks_of_year(year, config.locale).await?;

    let weeks: Vec<&Week> = match month {
        Some(m) => weeks_of_month(&weeks, year, m),
        None => weeks.iter().collect(),
    };

    Ok(HttpResponse::Ok().json(weeks))
}

/// Days of the week containing a date
#[utoipa::path(
    get,
    path = "/api/calendar/weeks/{date}/days",
    params(
        ("date" = String, Path, description = "Any date of the week, usually its Monday")
    ),
    responses(
        (status = 200, description = "Monday to Sunday", body = [Day]),
        (status = 400, description = "Date outside the supported years")
    ),
    tag = "Calendar"
)]
pub async fn week_days(
    config: web::Data<Config>,
    path: web::Path<NaiveDate>,
) -> ApiResult<HttpResponse> {
    let week = week_of(path.into_inner(), config.locale).await?;
    Ok(HttpResponse::Ok().json(expand_week(&week, config.locale)))
}

/// Slot grid of a week
#[utoipa::path(
    get,
    path = "/api/schedule/{date}",
    params(
        ("date" = String, Path, description = "Any date of the week")
    ),
    responses(
        (status = 200, description = "Seven day columns with their lanes", body = WeekBoardResponse),
        (status = 400, description = "Date outside the supported years")
    ),
    tag = "Schedule"
)]
pub async fn week_board(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    path: web::Path<NaiveDate>,
) -> ApiResult<HttpResponse> {
    let week = week_of(path.into_inner(), config.locale).await?;
    let snapshot = load_snapshot(pool.get_ref()).await?;

    debug!(week_start = %week.start, leaves = snapshot.leaves.len(), "Building week board");
    Ok(HttpResponse::Ok().json(board_response(&snapshot, week, &config)))
}

/// Board for a caller-supplied snapshot
#[utoipa::path(
    post,
    path = "/api/schedule/preview",
    request_body = PreviewRequest,
    responses(
        (status = 200, description = "Board and meal list of the posted snapshot", body = PreviewResponse),
        (status = 400, description = "Date outside the supported years")
    ),
    tag = "Schedule"
)]
pub async fn preview(
    config: web::Data<Config>,
    payload: web::Json<PreviewRequest>,
) -> ApiResult<HttpResponse> {
    let PreviewRequest {
        employees,
        leaves,
        week_start,
    } = payload.into_inner();

    let snapshot = Snapshot::from_json(employees, leaves);
    let week = week_of(week_start, config.locale).await?;
    let meals = snapshot.board().meal_week(&week, config.locale);

    Ok(HttpResponse::Ok().json(PreviewResponse {
        board: board_response(&snapshot, week, &config),
        meals,
    }))
}

/// Meal list of a week
#[utoipa::path(
    get,
    path = "/api/meals/{date}",
    params(
        ("date" = String, Path, description = "Any date of the week")
    ),
    responses(
        (status = 200, description = "Daily meal counts and weekly total", body = MealWeek),
        (status = 400, description = "Date outside the supported years")
    ),
    tag = "Meals"
)]
pub async fn week_meals(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    path: web::Path<NaiveDate>,
) -> ApiResult<HttpResponse> {
    let week = week_of(path.into_inner(), config.locale).await?;
    let snapshot = load_snapshot(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(snapshot.board().meal_week(&week, config.locale)))
}

/// Meal lists of a month
#[utoipa::path(
    get,
    path = "/api/meals",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Weekly meal lists of the month and the monthly total", body = MonthlyMealsResponse),
        (status = 400, description = "Invalid year or month")
    ),
    tag = "Meals"
)]
pub async fn month_meals(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    query: web::Query<CalendarQuery>,
) -> ApiResult<HttpResponse> {
    let (year, month) = resolve_month(&config, &query)?;
    let month = month.unwrap_or(0);

    let weeks = weeks_of_year(year, config.locale).await?;
    let snapshot = load_snapshot(pool.get_ref()).await?;
    let board = snapshot.board();

    let response = MonthlyMealsResponse {
        year,
        month,
        weeks: weeks_of_month(&weeks, year, month)
            .into_iter()
            .map(|week| board.meal_week(week, config.locale))
            .collect(),
        monthly_total: board.monthly_meal_total(year, month)?,
    };

    debug!(year, month, total = response.monthly_total, "Monthly meal roll-up");
    Ok(HttpResponse::Ok().json(response))
}

