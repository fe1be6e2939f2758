use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::book::BookLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::parse_optional_timestamp;

/// Record a booking for an employee.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Book { employee, at } = cmd {
        let zone = cfg.reference_zone()?;
        let timestamp = parse_optional_timestamp(at.as_ref(), zone)?.unwrap_or_else(|| zone.now());

        let mut pool = DbPool::open(&cfg.database)?;
        let booking = BookLogic::book(&mut pool, employee, timestamp)?;

        success(format!(
            "Booking #{} recorded for {} at {}",
            booking.id,
            booking.employee_id,
            booking.timestamp_str()
        ));
    }

    Ok(())
}
