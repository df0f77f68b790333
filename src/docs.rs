use crate::api::employee::{CreateEmployee, UpdateEmployee};
use crate::api::leave::CreateLeave;
use crate::api::leave_type::CreateLeaveType;
use crate::api::overtime::CreateOvertime;
use crate::api::schedule::{
    MonthlyMealsResponse, PreviewRequest, PreviewResponse, WeekBoardResponse,
};
use crate::model::{Employee, LeaveKind, LeaveRecord, LeaveTypeRecord, OvertimeRecord, Position, WorkType};
use crate::schedule::{Day, DayBoard, DayClass, Locale, MealDay, MealWeek, SlotView, Week};
use utoipa::OpenApi;

/// Prefix the handler annotations are written against.
const DOCUMENTED_PREFIX: &str = "/api";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Board API",
        version = "1.0.0",
        description = r#"
## Team Leave Board

Weekly leave planner for a small support team.

### Key Features
- **Roster**
  - Create, update, list and delete employees
- **Leave slots**
  - Seven lanes per calendar day, one leave per employee per day
- **Calendar**
  - Monday-anchored weeks of a year with localized labels
- **Meal list**
  - Daily count of office employees not on leave
- **Overtime and leave types**
  - Per-employee hour and leave-kind records

### Response Format
- JSON-based RESTful responses
- Errors are returned as `{"detail": "..."}`

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::ping,

        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::leave::list_leaves,
        crate::api::leave::create_leave,
        crate::api::leave::delete_leave,

        crate::api::overtime::list_overtime,
        crate::api::overtime::create_overtime,
        crate::api::overtime::delete_overtime,

        crate::api::leave_type::list_leave_types,
        crate::api::leave_type::create_leave_type,
        crate::api::leave_type::delete_leave_type,

        crate::api::schedule::list_weeks,
        crate::api::schedule::week_days,
        crate::api::schedule::week_board,
        crate::api::schedule::preview,
        crate::api::schedule::week_meals,
        crate::api::schedule::month_meals
    ),
    components(
        schemas(
            Employee,
            Position,
            WorkType,
            LeaveRecord,
            OvertimeRecord,
            LeaveTypeRecord,
            LeaveKind,
            Week,
            Day,
            DayClass,
            Locale,
            SlotView,
            DayBoard,
            MealDay,
            MealWeek,
            CreateEmployee,
            UpdateEmployee,
            CreateLeave,
            CreateOvertime,
            CreateLeaveType,
            WeekBoardResponse,
            MonthlyMealsResponse,
            PreviewRequest,
            PreviewResponse
        )
    ),
    tags(
        (name = "Employee", description = "Roster management APIs"),
        (name = "Leave", description = "Leave slot APIs"),
        (name = "Overtime", description = "Overtime hour APIs"),
        (name = "Leave type", description = "Leave kind APIs"),
        (name = "Calendar", description = "Week and day derivation"),
        (name = "Schedule", description = "Weekly slot grid"),
        (name = "Meals", description = "Meal list APIs"),
        (name = "Health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// The OpenAPI document with every path moved under `api_prefix`, matching
/// where `routes::configure` actually mounts the handlers.
pub fn openapi_for_prefix(api_prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let prefix = api_prefix.trim_end_matches('/');

    if prefix != DOCUMENTED_PREFIX {
        doc.paths.paths = std::mem::take(&mut doc.paths.paths)
            .into_iter()
            .map(|(path, item)| match path.strip_prefix(DOCUMENTED_PREFIX) {
                Some(rest) => (format!("{prefix}{rest}"), item),
                None => (path, item),
            })
            .collect();
    }
    doc
}
