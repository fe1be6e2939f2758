use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::worktime::WorkTimeLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::table::Table;
use crate::utils::time::ms2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Worked { employee, details } = cmd {
        let pool = DbPool::open(&cfg.database)?;

        if *details {
            let days = WorkTimeLogic::daily_summaries(&pool, employee)?;

            header(format!("Worked time of {}", employee));
            if days.is_empty() {
                println!("No bookings for {}.", employee);
            } else {
                let sep = cfg.separator_char.chars().next().unwrap_or('-');
                let mut table = Table::new(&["DATE", "BOOKINGS", "STATUS", "WORKED"], sep);
                for d in &days {
                    table.add_row(vec![
                        d.date.to_string(),
                        d.bookings.to_string(),
                        if d.valid { "ok" } else { "skipped" }.to_string(),
                        ms2readable(d.worked_ms),
                    ]);
                }
                print!("{}", table.render());
                println!();
            }
        }

        let total = WorkTimeLogic::total_worked_ms(&pool, employee)?;
        println!("Total worked: {} ({} ms)", ms2readable(total), total);
    }

    Ok(())
}
