use actix_cors::Cors;
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer, http::header};
use anyhow::Context;

use leave_board::config::Config;
use leave_board::db::init_db;
use leave_board::docs::openapi_for_prefix;
use leave_board::routes;
use leave_board::utils::{calendar_cache, seed};

use tracing::{info, warn};
use tracing_appender::rolling;
use utoipa_swagger_ui::SwaggerUi;

fn cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(addr = %config.server_addr, locale = %config.locale, "Server starting...");

    let pool = init_db(&config.database_url, config.database_max_connections).await?;

    if config.seed_default_employees {
        let seeded = seed::seed_default_employees(&pool)
            .await
            .context("Failed to seed default employees")?;
        if seeded == 0 {
            info!("Roster already present, skipping seed");
        }
    }

    let (year, locale) = (config.calendar_year, config.locale);
    actix_web::rt::spawn(async move {
        if let Err(e) = calendar_cache::warmup_calendar_cache(year, locale).await {
            warn!(error = %e, "Failed to warmup calendar cache");
        }
    });

    let limiter = routes::build_limiter(config.rate_api_per_min)?;
    let server_addr = config.server_addr.clone();
    let openapi = openapi_for_prefix(&config.api_prefix);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .wrap(cors(&config.cors_origins))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", openapi.clone()),
            )
            .app_data(Data::new(pool.clone()))
            .app_data(Data::new(config.clone()))
            .configure(|cfg| routes::configure(cfg, &config.api_prefix, &limiter))
    })
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {server_addr}"))?
    .run()
    .await?;

    Ok(())
}
