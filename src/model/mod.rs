pub mod employee;
pub mod leave;
pub mod leave_type;
pub mod overtime;

pub use employee::{Employee, EmployeeId, Position, WorkType};
pub use leave::LeaveRecord;
pub use leave_type::{LeaveKind, LeaveTypeRecord};
pub use overtime::OvertimeRecord;
