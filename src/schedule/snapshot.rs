use serde::de::DeserializeOwned;
use serde_json::Value;

use super::board::LeaveBoard;
use crate::model::{Employee, LeaveRecord};

/// Coerce an externally supplied collection into a typed list.
///
/// Anything that is not a JSON array becomes an empty list, and array
/// elements that do not parse as `T` are dropped. Used only at the boundary;
/// the board itself always works on well-formed data.
pub fn normalize_collection<T: DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Owned roster + leave records a board is computed from.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub employees: Vec<Employee>,
    pub leaves: Vec<LeaveRecord>,
}

impl Snapshot {
    pub fn new(employees: Vec<Employee>, leaves: Vec<LeaveRecord>) -> Self {
        Self { employees, leaves }
    }

    pub fn from_json(employees: Value, leaves: Value) -> Self {
        Self {
            employees: normalize_collection(employees),
            leaves: normalize_collection(leaves),
        }
    }

    pub fn board(&self) -> LeaveBoard<'_> {
        LeaveBoard::new(&self.employees, &self.leaves)
    }
}
