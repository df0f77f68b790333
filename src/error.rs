use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;
use tracing::error;

use crate::schedule::ScheduleError;

/// Every failed request answers with `{"detail": "<message>"}`.
#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "{}", _0)]
    BadRequest(String),
    #[display(fmt = "{}", _0)]
    NotFound(String),
    #[display(fmt = "Internal Server Error")]
    Internal,
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "detail": self.to_string()
        }))
    }
}

impl From<ScheduleError> for ApiError {
    fn from(e: ScheduleError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            // unique index on (date, slot) / (date, employee_id) lost a race
            if db_err.is_unique_violation() {
                return ApiError::bad_request("Conflicting leave record already exists");
            }
            // a deferred write transaction lost the lock to a concurrent writer
            if is_busy(db_err.code().as_deref()) {
                return ApiError::bad_request("Leave board is being updated, please retry");
            }
        }

        error!(error = %e, "Database error");
        ApiError::Internal
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

const SQLITE_BUSY: i32 = 5;

/// Matches `SQLITE_BUSY` and its extended codes (`BUSY_SNAPSHOT`, ...).
fn is_busy(code: Option<&str>) -> bool {
    code.and_then(|c| c.parse::<i32>().ok())
        .is_some_and(|c| c & 0xff == SQLITE_BUSY)
}
