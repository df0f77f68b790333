//! Calendar derivation and leave aggregation.
//!
//! Everything in here is a pure function of the snapshot it is handed: no I/O,
//! no clock, no interior mutability. Handlers load a snapshot, build a
//! [`board::LeaveBoard`] over it and render whatever view they need.

pub mod board;
pub mod calendar;
pub mod policy;
pub mod snapshot;

use chrono::NaiveDate;
use derive_more::Display;

use crate::model::EmployeeId;

pub use board::{DayBoard, LeaveBoard, MealDay, MealWeek, SLOTS_PER_DAY, SlotView};
pub use calendar::{Day, Locale, Week};
pub use policy::{DayClass, LeavePolicy};
pub use snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SlotConflict {
    #[display(fmt = "slot {} is already taken", _0)]
    Occupied(u8),
    #[display(fmt = "slot {} is out of range", _0)]
    OutOfRange(u8),
    #[display(fmt = "all {} slots are taken", SLOTS_PER_DAY)]
    DayFull,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ScheduleError {
    #[display(fmt = "No leave can be added on {}: {}", date, reason)]
    SlotUnavailable { date: NaiveDate, reason: SlotConflict },

    #[display(fmt = "Employee {} is already on leave on {}", employee_id, date)]
    AlreadyOnLeave { employee_id: EmployeeId, date: NaiveDate },

    #[display(fmt = "Unknown employee id {}", _0)]
    UnknownEmployee(EmployeeId),

    #[display(fmt = "Leave cannot be taken for today ({})", _0)]
    SameDayLeave(NaiveDate),

    #[display(fmt = "{} and {} cannot be on leave on the same day ({})", employee_id, other, date)]
    ExclusivePair {
        employee_id: EmployeeId,
        other: EmployeeId,
        date: NaiveDate,
    },

    #[display(fmt = "Maximum number of leaves ({}) reached for {}", limit, date)]
    DailyLimitReached { date: NaiveDate, limit: usize },

    #[display(fmt = "week_start {} is not the Monday of {}", week_start, date)]
    WeekStartMismatch { date: NaiveDate, week_start: NaiveDate },

    #[display(fmt = "Year {} is outside the supported calendar range", _0)]
    InvalidYear(i32),

    #[display(fmt = "Month index {} is out of range (0-11)", _0)]
    InvalidMonth(u32),
}

impl std::error::Error for ScheduleError {}
