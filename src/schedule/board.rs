use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;

use super::calendar::{Day, Locale, Week, expand_week};
use super::policy::DayClass;
use super::{ScheduleError, SlotConflict};
use crate::model::{Employee, EmployeeId, LeaveRecord};

/// Lanes per calendar day.
pub const SLOTS_PER_DAY: u8 = 7;

/// Read-only view over one snapshot of the roster and the leave records.
///
/// Employees are resolved by [`EmployeeId`]; a leave whose employee is no
/// longer in the roster renders as an empty lane instead of failing.
#[derive(Debug, Clone, Copy)]
pub struct LeaveBoard<'a> {
    employees: &'a [Employee],
    leaves: &'a [LeaveRecord],
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SlotView {
    pub slot: u8,
    /// Set whenever a record holds the lane, even if its employee is gone
    pub leave_id: Option<String>,
    pub occupant: Option<Employee>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DayBoard {
    pub day: Day,
    pub slots: Vec<SlotView>,
    /// Candidates for the "add leave" selector
    pub available: Vec<Employee>,
    pub full: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MealDay {
    pub day: Day,
    pub meal_count: usize,
    pub present: Vec<Employee>,
    pub absent: Vec<Employee>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MealWeek {
    pub week: Week,
    pub days: Vec<MealDay>,
    pub weekly_total: usize,
    pub office_count: usize,
    pub home_office_count: usize,
}

impl<'a> LeaveBoard<'a> {
    pub fn new(employees: &'a [Employee], leaves: &'a [LeaveRecord]) -> Self {
        Self { employees, leaves }
    }

    pub fn employee(&self, id: &EmployeeId) -> Option<&'a Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }

    pub fn leaves_for_day(&self, date: NaiveDate) -> Vec<&'a LeaveRecord> {
        self.leaves.iter().filter(|l| l.date == date).collect()
    }

    fn record_in_slot(&self, date: NaiveDate, slot: u8) -> Option<&'a LeaveRecord> {
        self.leaves
            .iter()
            .find(|l| l.date == date && l.slot == slot)
    }

    pub fn slot_occupant(&self, date: NaiveDate, slot: u8) -> Option<&'a Employee> {
        self.record_in_slot(date, slot)
            .and_then(|record| self.employee(&record.employee_id))
    }

    pub fn is_on_leave(&self, employee_id: &EmployeeId, date: NaiveDate) -> bool {
        self.leaves
            .iter()
            .any(|l| l.date == date && &l.employee_id == employee_id)
    }

    fn on_leave_ids(&self, date: NaiveDate) -> HashSet<&'a EmployeeId> {
        self.leaves
            .iter()
            .filter(|l| l.date == date)
            .map(|l| &l.employee_id)
            .collect()
    }

    /// Roster members without a leave record on `date`.
    pub fn available_employees(&self, date: NaiveDate) -> Vec<&'a Employee> {
        let taken = self.on_leave_ids(date);
        self.employees
            .iter()
            .filter(|e| !taken.contains(&e.id))
            .collect()
    }

    /// Lowest lane not held by any record on `date`.
    pub fn next_free_slot(&self, date: NaiveDate) -> Result<u8, ScheduleError> {
        (0..SLOTS_PER_DAY)
            .find(|slot| self.record_in_slot(date, *slot).is_none())
            .ok_or(ScheduleError::SlotUnavailable {
                date,
                reason: SlotConflict::DayFull,
            })
    }

    /// Validates a new leave against the hard constraints and returns the lane
    /// it should occupy: the requested one, or the lowest free lane.
    pub fn check_assignment(
        &self,
        employee_id: &EmployeeId,
        date: NaiveDate,
        requested: Option<u8>,
    ) -> Result<u8, ScheduleError> {
        if self.employee(employee_id).is_none() {
            return Err(ScheduleError::UnknownEmployee(employee_id.clone()));
        }

        if self.is_on_leave(employee_id, date) {
            return Err(ScheduleError::AlreadyOnLeave {
                employee_id: employee_id.clone(),
                date,
            });
        }

        if self.leaves_for_day(date).len() >= SLOTS_PER_DAY as usize {
            return Err(ScheduleError::SlotUnavailable {
                date,
                reason: SlotConflict::DayFull,
            });
        }

        match requested {
            Some(slot) if slot >= SLOTS_PER_DAY => Err(ScheduleError::SlotUnavailable {
                date,
                reason: SlotConflict::OutOfRange(slot),
            }),
            Some(slot) if self.record_in_slot(date, slot).is_some() => {
                Err(ScheduleError::SlotUnavailable {
                    date,
                    reason: SlotConflict::Occupied(slot),
                })
            }
            Some(slot) => Ok(slot),
            None => self.next_free_slot(date),
        }
    }

    pub fn day_board(&self, day: &Day) -> DayBoard {
        let slots: Vec<SlotView> = (0..SLOTS_PER_DAY)
            .map(|slot| {
                let record = self.record_in_slot(day.date, slot);
                SlotView {
                    slot,
                    leave_id: record.map(|r| r.id.clone()),
                    occupant: record
                        .and_then(|r| self.employee(&r.employee_id))
                        .cloned(),
                }
            })
            .collect();

        DayBoard {
            day: day.clone(),
            full: slots.iter().all(|s| s.leave_id.is_some()),
            slots,
            available: self
                .available_employees(day.date)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    pub fn week_board(&self, week: &Week, locale: Locale) -> Vec<DayBoard> {
        expand_week(week, locale)
            .iter()
            .map(|day| self.day_board(day))
            .collect()
    }

    pub fn office_employees(&self) -> impl Iterator<Item = &'a Employee> {
        self.employees.iter().filter(|e| e.is_office())
    }

    pub fn home_office_employees(&self) -> impl Iterator<Item = &'a Employee> {
        self.employees.iter().filter(|e| !e.is_office())
    }

    pub fn meal_count_on(&self, date: NaiveDate) -> usize {
        let off = self.on_leave_ids(date);
        self.office_employees()
            .filter(|e| !off.contains(&e.id))
            .count()
    }

    pub fn meal_day(&self, day: &Day) -> MealDay {
        let off = self.on_leave_ids(day.date);
        let (absent, present): (Vec<Employee>, Vec<Employee>) = self
            .office_employees()
            .cloned()
            .partition(|e| off.contains(&e.id));

        MealDay {
            day: day.clone(),
            meal_count: present.len(),
            present,
            absent,
        }
    }

    pub fn meal_week(&self, week: &Week, locale: Locale) -> MealWeek {
        let days: Vec<MealDay> = expand_week(week, locale)
            .iter()
            .map(|day| self.meal_day(day))
            .collect();

        MealWeek {
            week: week.clone(),
            weekly_total: days.iter().map(|d| d.meal_count).sum(),
            days,
            office_count: self.office_employees().count(),
            home_office_count: self.home_office_employees().count(),
        }
    }

    /// Meals for every date of a calendar month, each date counted once even
    /// when two displayed weeks share it.
    pub fn monthly_meal_total(&self, year: i32, month0: u32) -> Result<usize, ScheduleError> {
        if month0 > 11 {
            return Err(ScheduleError::InvalidMonth(month0));
        }
        let first =
            NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or(ScheduleError::InvalidYear(year))?;

        Ok(first
            .iter_days()
            .take_while(|date| date.month0() == month0)
            .map(|date| self.meal_count_on(date))
            .sum())
    }
}

/// Advisory class of the day a leave falls on.
pub fn day_class(date: NaiveDate) -> DayClass {
    DayClass::of(date.weekday())
}
