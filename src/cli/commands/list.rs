use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::book::BookLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::booking::Booking;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { employee, json } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let bookings = BookLogic::find_all(&pool, employee.as_deref())?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&bookings)?);
        } else if bookings.is_empty() {
            println!("No bookings found.");
        } else {
            print!("{}", render(&bookings, cfg));
        }
    }
    Ok(())
}

pub(crate) fn render(bookings: &[Booking], cfg: &Config) -> String {
    let sep = cfg.separator_char.chars().next().unwrap_or('-');
    let mut table = Table::new(&["ID", "EMPLOYEE", "TIMESTAMP", "DATE"], sep);

    for b in bookings {
        table.add_row(vec![
            b.id.to_string(),
            b.employee_id.clone(),
            b.timestamp_str(),
            b.local_date().to_string(),
        ]);
    }

    table.render()
}
