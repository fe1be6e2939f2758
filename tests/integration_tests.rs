use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{book_all, init_db, setup_test_db, tb};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    tb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_worked_two_pairs_in_one_day() {
    let db_path = setup_test_db("worked_two_pairs");
    init_db(&db_path);

    book_all(
        &db_path,
        "E100",
        &[
            "2025-09-01T09:00:00+02:00",
            "2025-09-01T12:00:00+02:00",
            "2025-09-01T13:00:00+02:00",
            "2025-09-01T17:00:00+02:00",
        ],
    );

    tb().args(["--db", &db_path, "worked", "E100"])
        .assert()
        .success()
        .stdout(contains("Total worked: 07h 00m (25200000 ms)"));
}

#[test]
fn test_worked_odd_day_is_skipped() {
    let db_path = setup_test_db("worked_odd_day");
    init_db(&db_path);

    book_all(
        &db_path,
        "E100",
        &[
            // valid: 8h
            "2025-09-01T09:00:00+02:00",
            "2025-09-01T17:00:00+02:00",
            // odd: contributes nothing
            "2025-09-02T09:00:00+02:00",
            "2025-09-02T17:00:00+02:00",
            "2025-09-02T17:30:00+02:00",
        ],
    );

    tb().args(["--db", &db_path, "worked", "E100", "--details"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("skipped"))
        .stdout(contains("Total worked: 08h 00m (28800000 ms)"));
}

#[test]
fn test_worked_unknown_employee_is_zero() {
    let db_path = setup_test_db("worked_unknown");
    init_db(&db_path);

    tb().args(["--db", &db_path, "worked", "nobody"])
        .assert()
        .success()
        .stdout(contains("Total worked: 00h 00m (0 ms)"));
}

#[test]
fn test_worked_pairs_even_when_booked_out_of_order() {
    let db_path = setup_test_db("worked_out_of_order");
    init_db(&db_path);

    // insertion order does not matter, the store sorts by instant
    book_all(
        &db_path,
        "E7",
        &["2025-09-01T17:00:00Z", "2025-09-01T09:00:00Z"],
    );

    tb().args(["--db", &db_path, "worked", "E7"])
        .assert()
        .success()
        .stdout(contains("(28800000 ms)"));
}

#[test]
fn test_active_on_day_uses_reference_timezone() {
    let db_path = setup_test_db("active_tz");
    init_db(&db_path);

    book_all(&db_path, "E1", &["2025-09-01T23:30:00Z"]);

    tb().args(["--db", &db_path, "--tz", "Z", "active", "E1", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains(": yes"));

    // 23:30Z is already the 2nd at +01:00
    tb().args(["--db", &db_path, "--tz", "+01:00", "active", "E1", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains(": no"));

    tb().args(["--db", &db_path, "--tz", "+01:00", "active", "E1", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains(": yes"));
}

#[test]
fn test_active_rejects_bad_date() {
    let db_path = setup_test_db("active_bad_date");
    init_db(&db_path);

    tb().args(["--db", &db_path, "active", "E1", "01/09/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_book_naive_timestamp_uses_reference_timezone() {
    let db_path = setup_test_db("book_naive");
    init_db(&db_path);

    tb().args(["--db", &db_path, "--tz", "+05:30", "book", "E1", "--at", "2025-09-01 09:15"])
        .assert()
        .success()
        .stdout(contains("2025-09-01T09:15:00+05:30"));
}

#[test]
fn test_book_rejects_bad_timestamp() {
    let db_path = setup_test_db("book_bad_ts");
    init_db(&db_path);

    tb().args(["--db", &db_path, "book", "E1", "--at", "tomorrow morning"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));
}

#[test]
fn test_list_show_and_json() {
    let db_path = setup_test_db("list_show");
    init_db(&db_path);

    book_all(&db_path, "E1", &["2025-09-01T09:00:00Z"]);
    book_all(&db_path, "E2", &["2025-09-01T10:00:00Z"]);

    tb().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("E1"))
        .stdout(contains("E2"));

    tb().args(["--db", &db_path, "list", "--employee", "E2"])
        .assert()
        .success()
        .stdout(contains("E2").and(contains("E1").not()));

    tb().args(["--db", &db_path, "show", "1", "--json"])
        .assert()
        .success()
        .stdout(contains("\"employee_id\": \"E1\""))
        .stdout(contains("\"timestamp\": \"2025-09-01T09:00:00"));

    tb().args(["--db", &db_path, "show", "99"])
        .assert()
        .failure()
        .stderr(contains("No booking found with id 99"));
}

#[test]
fn test_update_changes_employee_only() {
    let db_path = setup_test_db("update_employee");
    init_db(&db_path);

    book_all(&db_path, "E1", &["2025-09-01T09:00:00Z"]);

    tb().args(["--db", &db_path, "update", "1", "--employee", "E2"])
        .assert()
        .success()
        .stdout(contains("Booking #1 updated: E2 at 2025-09-01T09:00:00+00:00"));

    tb().args(["--db", &db_path, "update", "1"])
        .assert()
        .failure()
        .stderr(contains("Nothing to update"));

    tb().args(["--db", &db_path, "update", "42", "--employee", "E3"])
        .assert()
        .failure()
        .stderr(contains("No booking found with id 42"));
}

#[test]
fn test_delete_with_confirmation() {
    let db_path = setup_test_db("delete_confirm");
    init_db(&db_path);

    book_all(&db_path, "E1", &["2025-09-01T09:00:00Z"]);

    tb().args(["--db", &db_path, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    tb().args(["--db", &db_path, "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Booking #1 has been deleted"));

    tb().args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No booking found with id 1"));
}

#[test]
fn test_log_records_writes() {
    let db_path = setup_test_db("audit_log");
    init_db(&db_path);

    book_all(&db_path, "E1", &["2025-09-01T09:00:00Z"]);
    tb().args(["--db", &db_path, "del", "1", "-y"]).assert().success();

    tb().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("book"))
        .stdout(contains("Deleted booking of E1"));
}

#[test]
fn test_db_info_lists_migrations() {
    let db_path = setup_test_db("db_info");
    init_db(&db_path);

    tb().args(["--db", &db_path, "--tz", "Z", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("20261001_0001_create_time_bookings"))
        .stdout(contains("Bookings           : 0"));
}
