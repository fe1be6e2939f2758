use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::book::BookLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;

        let booking = BookLogic::find_one(&pool, *id)?.ok_or(AppError::BookingNotFound(*id))?;

        let prompt = format!(
            "Delete booking #{} ({} at {})? This action is irreversible.",
            booking.id,
            booking.employee_id,
            booking.timestamp_str()
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        BookLogic::delete(&mut pool, *id)?;
        success(format!("Booking #{} has been deleted.", id));
    }

    Ok(())
}
