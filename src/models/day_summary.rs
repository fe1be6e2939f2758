use chrono::NaiveDate;
use serde::Serialize;

/// Worked time of one calendar date for one employee.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub bookings: usize,
    pub valid: bool,
    pub worked_ms: i64, // 0 when the day is not valid
}
