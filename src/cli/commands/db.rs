use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::book::BookLogic;
use crate::db::migrate::applied_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { migrate, info } = cmd {
        // opening runs any pending migration
        let pool = DbPool::open(&cfg.database)?;

        if *migrate {
            success("Database schema is up to date.");
        }

        if *info {
            header("Database");
            println!("Path               : {}", cfg.database);
            println!("Bookings           : {}", BookLogic::find_all(&pool, None)?.len());
            println!("Reference timezone : {}", cfg.reference_zone()?);
            println!("Migrations applied :");
            for m in applied_migrations(&pool.conn)? {
                println!("  - {}", m);
            }
        }
    }

    Ok(())
}
