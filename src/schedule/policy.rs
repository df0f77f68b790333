use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ScheduleError;
use super::board::{LeaveBoard, SLOTS_PER_DAY};
use crate::model::EmployeeId;

/// Advisory classification shown on each day column. Never blocks an
/// assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    /// Monday, Friday and weekends need a team lead's sign-off.
    ApprovalRequired,
    /// Tuesday to Thursday.
    Flexible,
}

impl DayClass {
    pub fn of(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Tue | Weekday::Wed | Weekday::Thu => DayClass::Flexible,
            Weekday::Mon | Weekday::Fri | Weekday::Sat | Weekday::Sun => {
                DayClass::ApprovalRequired
            }
        }
    }
}

/// While `employee_id` is off, the day holds at most `max_leaves` records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityAnchor {
    pub employee_id: EmployeeId,
    pub max_leaves: usize,
}

/// Team rules applied on top of the board's hard constraints when a leave is
/// created through the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeavePolicy {
    pub forbid_same_day: bool,
    pub exclusive_pairs: Vec<(EmployeeId, EmployeeId)>,
    pub capacity_anchors: Vec<CapacityAnchor>,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            forbid_same_day: true,
            exclusive_pairs: vec![(EmployeeId::from("rabia"), EmployeeId::from("ayca_demir"))],
            capacity_anchors: vec![CapacityAnchor {
                employee_id: EmployeeId::from("ayca_cisem"),
                max_leaves: 3,
            }],
        }
    }
}

impl LeavePolicy {
    /// Only the board's capacity and double-booking checks apply.
    pub fn permissive() -> Self {
        Self {
            forbid_same_day: false,
            exclusive_pairs: Vec::new(),
            capacity_anchors: Vec::new(),
        }
    }

    /// How many leave records `date` may hold given who is already off.
    pub fn day_limit(&self, board: &LeaveBoard<'_>, date: NaiveDate) -> usize {
        self.capacity_anchors
            .iter()
            .filter(|anchor| board.is_on_leave(&anchor.employee_id, date))
            .map(|anchor| anchor.max_leaves)
            .min()
            .unwrap_or(SLOTS_PER_DAY as usize)
    }

    pub fn check(
        &self,
        board: &LeaveBoard<'_>,
        employee_id: &EmployeeId,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), ScheduleError> {
        if self.forbid_same_day && date == today {
            return Err(ScheduleError::SameDayLeave(date));
        }

        for (a, b) in &self.exclusive_pairs {
            let other = if employee_id == a {
                b
            } else if employee_id == b {
                a
            } else {
                continue;
            };

            if board.is_on_leave(other, date) {
                return Err(ScheduleError::ExclusivePair {
                    employee_id: employee_id.clone(),
                    other: other.clone(),
                    date,
                });
            }
        }

        let limit = self.day_limit(board, date);
        if board.leaves_for_day(date).len() >= limit {
            return Err(ScheduleError::DailyLimitReached { date, limit });
        }

        Ok(())
    }
}
