use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::worktime::WorkTimeLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Active {
        employee,
        date: date_str,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
        let zone = cfg.reference_zone()?;

        let pool = DbPool::open(&cfg.database)?;
        let active = WorkTimeLogic::has_activity_on_day(&pool, employee, d, zone)?;

        println!(
            "Activity of {} on {} ({}): {}",
            employee,
            d,
            zone,
            if active { "yes" } else { "no" }
        );
    }

    Ok(())
}
