use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use ansi_term::Colour;

const OP_WIDTH_MAX: usize = 60;

/// Colour per audited operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "book" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries: Vec<_> = load_log(&pool.conn)?
            .into_iter()
            .map(|(id, raw_date, operation, target, message)| {
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);

                let op_target = if target.is_empty() {
                    operation.clone()
                } else {
                    truncate(&format!("{operation} ({target})"), OP_WIDTH_MAX)
                };

                (id, date, operation, op_target, message)
            })
            .collect();

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries.iter().map(|e| e.0.to_string().len()).max().unwrap_or(1);
        let date_w = entries.iter().map(|e| e.1.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| e.3.chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_MAX);

        println!("📜 Internal log:\n");

        for (id, date, operation, op_target, message) in entries {
            // padding is computed on the plain text, then only the op word is painted
            let padding = " ".repeat(op_w.saturating_sub(op_target.chars().count()));
            let painted = match op_target.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color_for_operation(&operation).paint(op), rest),
                None => color_for_operation(&operation).paint(op_target.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                painted,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
