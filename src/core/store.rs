//! Read capabilities the work-time aggregator needs from a booking store.

use crate::errors::AppResult;
use crate::models::booking::Booking;
use chrono::{DateTime, FixedOffset};

pub trait BookingStore {
    /// All bookings of `employee_id`, ascending by instant; equal instants
    /// are ordered by id.
    fn fetch_ordered(&self, employee_id: &str) -> AppResult<Vec<Booking>>;

    /// Whether `employee_id` has at least one booking in `[start, end]`.
    fn exists_in_range(
        &self,
        employee_id: &str,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> AppResult<bool>;
}
