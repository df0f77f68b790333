use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ScheduleError;
use super::policy::DayClass;

pub const DAYS_PER_WEEK: i64 = 7;

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

const MONTHS_TR: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];
const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const WEEKDAYS_TR: [&str; 7] = [
    "Pazartesi",
    "Salı",
    "Çarşamba",
    "Perşembe",
    "Cuma",
    "Cumartesi",
    "Pazar",
];
const WEEKDAYS_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Language of month and weekday names in labels.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    Tr,
    En,
}

impl Locale {
    /// `month0` is 0-based, as in [`Week::month`].
    pub fn month_name(self, month0: u32) -> &'static str {
        let table = match self {
            Locale::Tr => &MONTHS_TR,
            Locale::En => &MONTHS_EN,
        };
        table[month0 as usize % 12]
    }

    pub fn weekday_name(self, weekday: Weekday) -> &'static str {
        let table = match self {
            Locale::Tr => &WEEKDAYS_TR,
            Locale::En => &WEEKDAYS_EN,
        };
        table[weekday.num_days_from_monday() as usize]
    }
}

/// A Monday-to-Sunday span of the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Week {
    #[schema(example = "2025-12-29", format = "date", value_type = String)]
    pub start: NaiveDate,
    #[schema(example = "2026-01-04", format = "date", value_type = String)]
    pub end: NaiveDate,
    #[schema(example = "29 Aralık - 4 Ocak")]
    pub label: String,
    /// 0-based month of `end`; buckets the week into a month tab.
    #[schema(example = 0)]
    pub month: u32,
}

impl Week {
    /// `start` is expected to be a Monday; callers go through
    /// [`monday_on_or_before`] when it might not be.
    pub fn starting(start: NaiveDate, locale: Locale) -> Self {
        let end = start + Duration::days(DAYS_PER_WEEK - 1);
        let label = format!(
            "{} {} - {} {}",
            start.day(),
            locale.month_name(start.month0()),
            end.day(),
            locale.month_name(end.month0()),
        );

        Self {
            start,
            end,
            label,
            month: end.month0(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True when any day of the week falls in the given month.
    pub fn overlaps_month(&self, year: i32, month0: u32) -> bool {
        let hits = |d: NaiveDate| d.year() == year && d.month0() == month0;
        hits(self.start) || hits(self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    #[schema(example = "Pazartesi")]
    pub name: String,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = 5)]
    pub day_of_month: u32,
    /// 1-based month
    #[schema(example = 1)]
    pub month: u32,
    pub class: DayClass,
}

impl Day {
    pub fn new(date: NaiveDate, locale: Locale) -> Self {
        Self {
            name: locale.weekday_name(date.weekday()).to_string(),
            date,
            day_of_month: date.day(),
            month: date.month(),
            class: DayClass::of(date.weekday()),
        }
    }
}

pub fn monday_on_or_before(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Weeks covering `first..=last`, the first one anchored on the Monday on or
/// before `first`. A week is emitted as long as it starts on or before `last`,
/// so the final week may run past `last`.
pub fn weeks_between(first: NaiveDate, last: NaiveDate, locale: Locale) -> Vec<Week> {
    let mut weeks = Vec::new();
    let mut start = monday_on_or_before(first);

    while start <= last {
        weeks.push(Week::starting(start, locale));
        start += Duration::days(DAYS_PER_WEEK);
    }

    weeks
}

/// Every week touching `year`.
///
/// For 2026 the first week starts on 2025-12-29 and the last one on
/// 2026-12-28, ending in January 2027.
pub fn generate_weeks(year: i32, locale: Locale) -> Result<Vec<Week>, ScheduleError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ScheduleError::InvalidYear(year));
    }

    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(ScheduleError::InvalidYear(year))?;
    let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(ScheduleError::InvalidYear(year))?;

    Ok(weeks_between(first, last, locale))
}

/// The seven days of `week`, Monday first.
pub fn expand_week(week: &Week, locale: Locale) -> Vec<Day> {
    (0..DAYS_PER_WEEK)
        .map(|offset| Day::new(week.start + Duration::days(offset), locale))
        .collect()
}

pub fn week_containing(weeks: &[Week], date: NaiveDate) -> Option<&Week> {
    weeks.iter().find(|w| w.contains(date))
}

pub fn weeks_of_month(weeks: &[Week], year: i32, month0: u32) -> Vec<&Week> {
    weeks
        .iter()
        .filter(|w| w.overlaps_month(year, month0))
        .collect()
}
