use log::info;
use rusqlite::{Connection, OptionalExtension, Result};

/// Versioned schema step. `id` is recorded in the `log` table once applied.
struct Migration {
    id: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        id: "20261001_0001_create_time_bookings",
        description: "Created time_bookings table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS time_bookings (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  TEXT NOT NULL,
            booking      TEXT NOT NULL,
            booking_us   INTEGER NOT NULL,
            created_at   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        id: "20261001_0002_index_employee_instant",
        description: "Indexed time_bookings on (employee_id, booking_us)",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_time_bookings_employee_instant
            ON time_bookings(employee_id, booking_us, id);
        "#,
    },
];

/// Ensure that the `log` table exists. It doubles as the migration ledger.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.id, m.description],
    )?;

    tx.commit()?;

    info!("Migration applied: {} ({})", m.id, m.description);
    Ok(())
}

/// Public entry point: run all pending migrations, oldest first.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if !is_applied(conn, m.id)? {
            apply(conn, m)?;
        }
    }

    Ok(())
}

/// Ids of the migrations already recorded, in application order.
pub fn applied_migrations(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
