use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database
///  - all pending DB migrations
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // cfg.database already carries any --db override
    let db_path = Config::init_all(Some(cfg.database.as_str()), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing timebook…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database    : {}", &db_path);

    let pool = DbPool::open(&db_path)?;

    ttlog_or_warn(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {}", &db_path),
    );

    success(format!("Database initialized at {}", &db_path));
    Ok(())
}
