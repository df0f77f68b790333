pub mod employee;
pub mod leave;
pub mod leave_type;
pub mod overtime;
pub mod schedule;

use actix_web::{HttpResponse, Responder, get};
use serde_json::json;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/ping",
    responses(
        (status = 200, description = "Service is up", body = Object, example = json!({"pong": true}))
    ),
    tag = "Health"
)]
#[get("/ping")]
pub async fn ping() -> impl Responder {
    HttpResponse::Ok().json(json!({ "pong": true }))
}
