use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use chrono::DateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_BOOKING: &str = "SELECT id, employee_id, booking, created_at FROM time_bookings";

pub fn map_row(row: &Row) -> Result<Booking> {
    let ts_str: String = row.get("booking")?;

    let timestamp = DateTime::parse_from_rfc3339(&ts_str).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(ts_str.clone())),
        )
    })?;

    Ok(Booking {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        timestamp,
        created_at: row.get("created_at")?,
    })
}

/// Insert a booking and return its new id.
pub fn insert_booking(conn: &Connection, b: &Booking) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO time_bookings (employee_id, booking, booking_us, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![b.employee_id, b.timestamp_str(), b.instant_us(), b.created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update all fields except id and created_at.
pub fn update_booking(conn: &Connection, b: &Booking) -> AppResult<()> {
    conn.execute(
        "UPDATE time_bookings
         SET employee_id = ?1, booking = ?2, booking_us = ?3
         WHERE id = ?4",
        params![b.employee_id, b.timestamp_str(), b.instant_us(), b.id],
    )?;
    Ok(())
}

/// Returns the number of deleted rows (0 or 1).
pub fn delete_booking(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM time_bookings WHERE id = ?1", [id])?;
    Ok(n)
}

pub fn load_booking(conn: &Connection, id: i64) -> AppResult<Option<Booking>> {
    let mut stmt = conn.prepare(&format!("{SELECT_BOOKING} WHERE id = ?1"))?;
    let b = stmt.query_row([id], map_row).optional()?;
    Ok(b)
}

/// Every booking, in id order.
pub fn load_all_bookings(conn: &Connection) -> AppResult<Vec<Booking>> {
    let mut stmt = conn.prepare(&format!("{SELECT_BOOKING} ORDER BY id ASC"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Bookings of one employee, ascending by instant, ties by id.
pub fn load_bookings_by_employee(conn: &Connection, employee_id: &str) -> AppResult<Vec<Booking>> {
    let mut stmt = conn.prepare_cached(&format!(
        "{SELECT_BOOKING}
         WHERE employee_id = ?1
         ORDER BY booking_us ASC, id ASC"
    ))?;
    let rows = stmt.query_map([employee_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Inclusive range check on the UTC instant, in microseconds.
pub fn booking_exists_between(
    conn: &Connection,
    employee_id: &str,
    start_us: i64,
    end_us: i64,
) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached(
        "SELECT 1 FROM time_bookings
         WHERE employee_id = ?1 AND booking_us BETWEEN ?2 AND ?3
         LIMIT 1",
    )?;
    let exists = stmt.exists(params![employee_id, start_us, end_us])?;
    Ok(exists)
}

pub fn load_log(conn: &Connection) -> Result<Vec<(i64, String, String, String, String)>> {
    let mut stmt =
        conn.prepare("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
