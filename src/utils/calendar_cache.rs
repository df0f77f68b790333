use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use once_cell::sync::Lazy;
use tracing::info;

use chrono::{Datelike, NaiveDate};

use crate::schedule::calendar::{generate_weeks, week_containing};
use crate::schedule::{Locale, ScheduleError, Week};

/// Generated calendars keyed by `(year, locale)`.
/// Generation is pure, so a hit and a miss always yield the same weeks.
pub static CALENDAR_CACHE: Lazy<Cache<(i32, Locale), Arc<Vec<Week>>>> = Lazy::new(|| {
    Cache::builder()
        .max_capacity(64)
        .time_to_live(Duration::from_secs(86400)) // 24h TTL
        .build()
});

pub async fn weeks_of_year(year: i32, locale: Locale) -> Result<Arc<Vec<Week>>, ScheduleError> {
    if let Some(weeks) = CALENDAR_CACHE.get(&(year, locale)).await {
        return Ok(weeks);
    }

    let weeks = Arc::new(generate_weeks(year, locale)?);
    CALENDAR_CACHE.insert((year, locale), weeks.clone()).await;
    Ok(weeks)
}

/// The week holding `date`, taken from the calendar of `date`'s year.
/// Dates outside the supported years are rejected rather than stepped over.
pub async fn week_of(date: NaiveDate, locale: Locale) -> Result<Week, ScheduleError> {
    let year = date.year();
    let weeks = weeks_of_year(year, locale).await?;
    week_containing(&weeks, date)
        .cloned()
        .ok_or(ScheduleError::InvalidYear(year))
}

/// Pre-compute the configured year so the first page load is a cache hit.
pub async fn warmup_calendar_cache(year: i32, locale: Locale) -> Result<(), ScheduleError> {
    let weeks = weeks_of_year(year, locale).await?;
    info!(year, %locale, weeks = weeks.len(), "Calendar cache warmup complete");
    Ok(())
}
