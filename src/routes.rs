use crate::{
    api::{self, employee, leave, leave_type, overtime, schedule},
    error::ApiError,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::{HttpResponse, Responder, get, web};
use anyhow::{Result, anyhow};
use serde_json::json;

pub type LimiterConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter allowing `requests_per_min` with an equal burst.
pub fn build_limiter(requests_per_min: u32) -> Result<LimiterConfig> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);

    GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit: {requests_per_min} requests per minute"))
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Malformed bodies, paths and query strings answer with the same
/// `{"detail"}` shape as handler errors.
fn extractor_configs(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _| ApiError::bad_request(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _| ApiError::bad_request(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _| ApiError::bad_request(err.to_string()).into()),
    );
}

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str, limiter: &LimiterConfig) {
    extractor_configs(cfg);

    cfg.service(index);

    cfg.service(
        web::scope(api_prefix)
            .wrap(Governor::new(limiter)) // rate limiting
            .service(api::ping)
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    // /employees/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(employee::update_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/leaves")
                    .service(
                        web::resource("")
                            .route(web::get().to(leave::list_leaves))
                            .route(web::post().to(leave::create_leave)),
                    )
                    .service(web::resource("/{id}").route(web::delete().to(leave::delete_leave))),
            )
            .service(
                web::scope("/overtime")
                    .service(
                        web::resource("")
                            .route(web::get().to(overtime::list_overtime))
                            .route(web::post().to(overtime::create_overtime)),
                    )
                    .service(
                        web::resource("/{id}").route(web::delete().to(overtime::delete_overtime)),
                    ),
            )
            .service(
                web::scope("/leave-types")
                    .service(
                        web::resource("")
                            .route(web::get().to(leave_type::list_leave_types))
                            .route(web::post().to(leave_type::create_leave_type)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::delete().to(leave_type::delete_leave_type)),
                    ),
            )
            .service(
                web::scope("/calendar")
                    // /calendar/weeks?year=&month=
                    .service(web::resource("/weeks").route(web::get().to(schedule::list_weeks)))
                    // /calendar/weeks/{date}/days
                    .service(
                        web::resource("/weeks/{date}/days")
                            .route(web::get().to(schedule::week_days)),
                    ),
            )
            .service(
                web::scope("/schedule")
                    // registered before /{date} so POST is not swallowed by it
                    .service(web::resource("/preview").route(web::post().to(schedule::preview)))
                    .service(web::resource("/{date}").route(web::get().to(schedule::week_board))),
            )
            .service(
                web::scope("/meals")
                    .service(web::resource("").route(web::get().to(schedule::month_meals)))
                    .service(web::resource("/{date}").route(web::get().to(schedule::week_meals))),
            ),
    );
}
