use crate::cli::parser::Commands;
use crate::cli::commands::list::render;
use crate::config::Config;
use crate::core::book::BookLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id, json } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let booking = BookLogic::find_one(&pool, *id)?.ok_or(AppError::BookingNotFound(*id))?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&booking)?);
        } else {
            print!("{}", render(std::slice::from_ref(&booking), cfg));
        }
    }
    Ok(())
}
