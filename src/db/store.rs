//! SQLite-backed booking store.

use crate::core::store::BookingStore;
use crate::db::pool::DbPool;
use crate::db::queries::{booking_exists_between, load_bookings_by_employee};
use crate::errors::AppResult;
use crate::models::booking::Booking;
use chrono::{DateTime, FixedOffset};

impl BookingStore for DbPool {
    fn fetch_ordered(&self, employee_id: &str) -> AppResult<Vec<Booking>> {
        load_bookings_by_employee(&self.conn, employee_id)
    }

    fn exists_in_range(
        &self,
        employee_id: &str,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> AppResult<bool> {
        booking_exists_between(
            &self.conn,
            employee_id,
            start.timestamp_micros(),
            end.timestamp_micros(),
        )
    }
}
