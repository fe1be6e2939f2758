use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::book::BookLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::booking::BookingPatch;
use crate::ui::messages::success;
use crate::utils::time::parse_optional_timestamp;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update { id, employee, at } = cmd {
        let zone = cfg.reference_zone()?;
        let patch = BookingPatch {
            employee_id: employee.clone(),
            timestamp: parse_optional_timestamp(at.as_ref(), zone)?,
        };

        let mut pool = DbPool::open(&cfg.database)?;
        let updated =
            BookLogic::partial_update(&mut pool, *id, &patch)?.ok_or(AppError::BookingNotFound(*id))?;

        success(format!(
            "Booking #{} updated: {} at {}",
            updated.id,
            updated.employee_id,
            updated.timestamp_str()
        ));
    }
    Ok(())
}
