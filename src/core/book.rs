use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_booking, insert_booking, load_all_bookings, load_booking, load_bookings_by_employee,
    update_booking,
};
use crate::errors::{AppError, AppResult};
use crate::models::booking::{Booking, BookingPatch};
use chrono::{DateTime, FixedOffset};
use log::debug;

/// Create / read / update / delete of single bookings.
/// Every write is mirrored into the internal `log` table.
pub struct BookLogic;

fn check_employee(employee_id: &str) -> AppResult<()> {
    if employee_id.trim().is_empty() {
        return Err(AppError::InvalidEmployee(employee_id.to_string()));
    }
    Ok(())
}

impl BookLogic {
    /// Record a clock event. No ordering checks: the booking is stored as given.
    pub fn book(
        pool: &mut DbPool,
        employee_id: &str,
        timestamp: DateTime<FixedOffset>,
    ) -> AppResult<Booking> {
        check_employee(employee_id)?;

        let mut booking = Booking::new(employee_id, timestamp);
        debug!("Request to save booking: {:?}", booking);

        booking.id = insert_booking(&pool.conn, &booking)?;

        ttlog_or_warn(
            &pool.conn,
            "book",
            &format!("#{}", booking.id),
            &format!("{} booked at {}", booking.employee_id, booking.timestamp_str()),
        );

        Ok(booking)
    }

    /// Apply the set fields of `patch`. `Ok(None)` when the id is unknown.
    pub fn partial_update(
        pool: &mut DbPool,
        id: i64,
        patch: &BookingPatch,
    ) -> AppResult<Option<Booking>> {
        debug!("Request to partially update booking #{}: {:?}", id, patch);

        if patch.is_empty() {
            return Err(AppError::EmptyUpdate);
        }
        if let Some(emp) = &patch.employee_id {
            check_employee(emp)?;
        }

        let Some(mut existing) = load_booking(&pool.conn, id)? else {
            return Ok(None);
        };

        let before = existing.clone();
        patch.apply_to(&mut existing);
        update_booking(&pool.conn, &existing)?;

        ttlog_or_warn(
            &pool.conn,
            "edit",
            &format!("#{}", id),
            &format!(
                "{} @ {} -> {} @ {}",
                before.employee_id,
                before.timestamp_str(),
                existing.employee_id,
                existing.timestamp_str()
            ),
        );

        Ok(Some(existing))
    }

    pub fn find_one(pool: &DbPool, id: i64) -> AppResult<Option<Booking>> {
        debug!("Request to get booking #{}", id);
        load_booking(&pool.conn, id)
    }

    /// All bookings by id, or one employee's bookings in chronological order.
    pub fn find_all(pool: &DbPool, employee_id: Option<&str>) -> AppResult<Vec<Booking>> {
        debug!("Request to get bookings (employee filter: {:?})", employee_id);
        match employee_id {
            Some(emp) => load_bookings_by_employee(&pool.conn, emp),
            None => load_all_bookings(&pool.conn),
        }
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        debug!("Request to delete booking #{}", id);

        let existing = load_booking(&pool.conn, id)?.ok_or(AppError::BookingNotFound(id))?;
        delete_booking(&pool.conn, id)?;

        ttlog_or_warn(
            &pool.conn,
            "del",
            &format!("#{}", id),
            &format!(
                "Deleted booking of {} at {}",
                existing.employee_id,
                existing.timestamp_str()
            ),
        );

        Ok(())
    }
}
