use chrono::{DateTime, FixedOffset, Local, NaiveDate, SecondsFormat};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Booking {
    pub id: i64,                           // ⇔ time_bookings.id
    pub employee_id: String,               // ⇔ time_bookings.employee_id
    pub timestamp: DateTime<FixedOffset>,  // ⇔ time_bookings.booking (RFC 3339)
    pub created_at: String,                // ⇔ time_bookings.created_at
}

impl Booking {
    /// Builds a booking that has not been stored yet.
    /// - `id = 0` (assigned by the store on insert)
    /// - `created_at = now() in RFC 3339`
    pub fn new(employee_id: &str, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            id: 0,
            employee_id: employee_id.to_string(),
            timestamp,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Calendar date in the booking's own offset.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// UTC epoch microseconds, the column the store orders and filters on.
    pub fn instant_us(&self) -> i64 {
        self.timestamp.timestamp_micros()
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, false)
    }
}

/// Partial update of a booking; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct BookingPatch {
    pub employee_id: Option<String>,
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl BookingPatch {
    pub fn is_empty(&self) -> bool {
        self.employee_id.is_none() && self.timestamp.is_none()
    }

    pub fn apply_to(&self, booking: &mut Booking) {
        if let Some(emp) = &self.employee_id {
            booking.employee_id = emp.clone();
        }
        if let Some(ts) = self.timestamp {
            booking.timestamp = ts;
        }
    }
}
