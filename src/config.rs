use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use dotenvy::dotenv;

use crate::schedule::{LeavePolicy, Locale};

const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub database_max_connections: u32,

    // Rate limiting
    pub rate_api_per_min: u32,

    pub api_prefix: String,
    pub cors_origins: Vec<String>,

    pub log_dir: String,
    pub log_level: tracing::Level,

    pub calendar_year: i32,
    pub locale: Locale,

    pub seed_default_employees: bool,
    /// Team rules (exclusive pairs, reduced capacity, no same-day leave)
    pub enforce_roster_rules: bool,
}

fn var_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        _ => Ok(default),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite://leave_board.db".to_string(),
            database_max_connections: 5,
            rate_api_per_min: 1000,
            api_prefix: "/api".to_string(),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            log_dir: "logs".to_string(),
            log_level: tracing::Level::INFO,
            calendar_year: 2026,
            locale: Locale::Tr,
            seed_default_employees: true,
            enforce_roster_rules: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let defaults = Config::default();

        let cors_origins = match env::var("CORS_ORIGINS") {
            Ok(raw) if !raw.trim().is_empty() => raw
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
            _ => defaults.cors_origins,
        };

        Ok(Self {
            server_addr: var_or("SERVER_ADDR", defaults.server_addr)?,
            database_url: var_or("DATABASE_URL", defaults.database_url)?,
            database_max_connections: var_or(
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            )?,
            rate_api_per_min: var_or("RATE_API_PER_MIN", defaults.rate_api_per_min)?,
            api_prefix: var_or("API_PREFIX", defaults.api_prefix)?,
            cors_origins,
            log_dir: var_or("LOG_DIR", defaults.log_dir)?,
            log_level: var_or("LOG_LEVEL", defaults.log_level)?,
            calendar_year: var_or("CALENDAR_YEAR", defaults.calendar_year)?,
            locale: var_or("CALENDAR_LOCALE", defaults.locale)?,
            seed_default_employees: var_or(
                "SEED_DEFAULT_EMPLOYEES",
                defaults.seed_default_employees,
            )?,
            enforce_roster_rules: var_or("ENFORCE_ROSTER_RULES", defaults.enforce_roster_rules)?,
        })
    }

    pub fn leave_policy(&self) -> LeavePolicy {
        if self.enforce_roster_rules {
            LeavePolicy::default()
        } else {
            LeavePolicy::permissive()
        }
    }
}
