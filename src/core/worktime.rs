use crate::core::store::BookingStore;
use crate::errors::AppResult;
use crate::models::booking::Booking;
use crate::models::day_summary::DaySummary;
use crate::models::reference_zone::ReferenceZone;
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;

/// Worked-time computations over an employee's bookings.
///
/// Bookings carry no checkin/checkout tag: within one calendar date, sorted
/// ascending, positions 0, 2, 4, … open an interval and 1, 3, 5, … close it.
/// A date only counts when it holds an even number of bookings (at least 2);
/// any other date contributes nothing, not even its complete pairs.
pub struct WorkTimeLogic;

impl WorkTimeLogic {
    /// Total worked milliseconds across all valid days.
    pub fn total_worked_ms<S: BookingStore + ?Sized>(
        store: &S,
        employee_id: &str,
    ) -> AppResult<i64> {
        debug!("Request to compute worked time for {:?}", employee_id);

        let bookings = store.fetch_ordered(employee_id)?;
        let total = group_by_day(&bookings)
            .values()
            .filter_map(|day| day_worked_ms(day))
            .sum();

        Ok(total)
    }

    /// Per-date breakdown, ascending by date.
    pub fn daily_summaries<S: BookingStore + ?Sized>(
        store: &S,
        employee_id: &str,
    ) -> AppResult<Vec<DaySummary>> {
        debug!("Request to compute daily summaries for {:?}", employee_id);

        let bookings = store.fetch_ordered(employee_id)?;
        let out = group_by_day(&bookings)
            .into_iter()
            .map(|(date, day)| {
                let worked = day_worked_ms(&day);
                DaySummary {
                    date,
                    bookings: day.len(),
                    valid: worked.is_some(),
                    worked_ms: worked.unwrap_or(0),
                }
            })
            .collect();

        Ok(out)
    }

    /// Whether at least one booking falls inside `date` in the reference zone.
    pub fn has_activity_on_day<S: BookingStore + ?Sized>(
        store: &S,
        employee_id: &str,
        date: NaiveDate,
        zone: ReferenceZone,
    ) -> AppResult<bool> {
        debug!(
            "Request to check activity of {:?} on {} ({})",
            employee_id, date, zone
        );

        let (start, end) = zone.day_bounds(date)?;
        store.exists_in_range(employee_id, start, end)
    }
}

/// Buckets bookings by the calendar date of their own offset. Input order is
/// kept inside each bucket.
fn group_by_day(bookings: &[Booking]) -> BTreeMap<NaiveDate, Vec<&Booking>> {
    let mut days: BTreeMap<NaiveDate, Vec<&Booking>> = BTreeMap::new();
    for b in bookings {
        days.entry(b.local_date()).or_default().push(b);
    }
    days
}

/// Sum of (0,1), (2,3), … intervals, or `None` if the day is not valid.
fn day_worked_ms(day: &[&Booking]) -> Option<i64> {
    if day.len() < 2 || day.len() % 2 != 0 {
        return None;
    }

    let worked = day
        .chunks_exact(2)
        .map(|pair| (pair[1].timestamp - pair[0].timestamp).num_milliseconds())
        .sum();

    Some(worked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use chrono::{DateTime, FixedOffset};

    /// In-memory store; keeps insertion order, which tests supply ascending.
    struct MemoryStore {
        bookings: Vec<Booking>,
    }

    impl MemoryStore {
        fn new(rows: &[(&str, &str)]) -> Self {
            let bookings = rows
                .iter()
                .enumerate()
                .map(|(i, (emp, ts))| {
                    let mut b = Booking::new(emp, DateTime::parse_from_rfc3339(ts).unwrap());
                    b.id = i as i64 + 1;
                    b
                })
                .collect();
            Self { bookings }
        }
    }

    impl BookingStore for MemoryStore {
        fn fetch_ordered(&self, employee_id: &str) -> AppResult<Vec<Booking>> {
            Ok(self
                .bookings
                .iter()
                .filter(|b| b.employee_id == employee_id)
                .cloned()
                .collect())
        }

        fn exists_in_range(
            &self,
            employee_id: &str,
            start: DateTime<FixedOffset>,
            end: DateTime<FixedOffset>,
        ) -> AppResult<bool> {
            Ok(self
                .bookings
                .iter()
                .any(|b| b.employee_id == employee_id && b.timestamp >= start && b.timestamp <= end))
        }
    }

    struct BrokenStore;

    impl BookingStore for BrokenStore {
        fn fetch_ordered(&self, _: &str) -> AppResult<Vec<Booking>> {
            Err(AppError::Other("store unavailable".into()))
        }

        fn exists_in_range(
            &self,
            _: &str,
            _: DateTime<FixedOffset>,
            _: DateTime<FixedOffset>,
        ) -> AppResult<bool> {
            Err(AppError::Other("store unavailable".into()))
        }
    }

    const HOUR_MS: i64 = 3_600_000;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn no_bookings_is_zero() {
        let store = MemoryStore::new(&[]);
        assert_eq!(WorkTimeLogic::total_worked_ms(&store, "E1").unwrap(), 0);
        assert_eq!(WorkTimeLogic::total_worked_ms(&store, "").unwrap(), 0);
        assert!(WorkTimeLogic::daily_summaries(&store, "E1").unwrap().is_empty());
    }

    #[test]
    fn two_pairs_on_one_day() {
        let store = MemoryStore::new(&[
            ("E1", "2025-03-03T09:00:00+01:00"),
            ("E1", "2025-03-03T12:00:00+01:00"),
            ("E1", "2025-03-03T13:00:00+01:00"),
            ("E1", "2025-03-03T17:00:00+01:00"),
        ]);
        assert_eq!(
            WorkTimeLogic::total_worked_ms(&store, "E1").unwrap(),
            25_200_000
        );
    }

    #[test]
    fn odd_day_contributes_nothing() {
        let store = MemoryStore::new(&[
            ("E1", "2025-03-03T09:00:00+01:00"),
            ("E1", "2025-03-03T17:00:00+01:00"),
            ("E1", "2025-03-03T17:30:00+01:00"),
        ]);
        assert_eq!(WorkTimeLogic::total_worked_ms(&store, "E1").unwrap(), 0);
    }

    #[test]
    fn single_booking_day_contributes_nothing() {
        let store = MemoryStore::new(&[("E1", "2025-03-03T09:00:00+01:00")]);
        assert_eq!(WorkTimeLogic::total_worked_ms(&store, "E1").unwrap(), 0);
    }

    #[test]
    fn sums_valid_days_and_skips_invalid_ones() {
        let store = MemoryStore::new(&[
            // 8h
            ("E1", "2025-03-03T09:00:00+01:00"),
            ("E1", "2025-03-03T17:00:00+01:00"),
            // odd: its complete first pair must not leak into the total
            ("E1", "2025-03-04T09:00:00+01:00"),
            ("E1", "2025-03-04T12:00:00+01:00"),
            ("E1", "2025-03-04T13:00:00+01:00"),
            // 2h + 1h30
            ("E1", "2025-03-05T08:00:00+01:00"),
            ("E1", "2025-03-05T10:00:00+01:00"),
            ("E1", "2025-03-05T14:00:00+01:00"),
            ("E1", "2025-03-05T15:30:00+01:00"),
            // someone else
            ("E2", "2025-03-03T09:00:00+01:00"),
            ("E2", "2025-03-03T10:00:00+01:00"),
        ]);

        let expected = 8 * HOUR_MS + 2 * HOUR_MS + 90 * 60_000;
        assert_eq!(
            WorkTimeLogic::total_worked_ms(&store, "E1").unwrap(),
            expected
        );
        assert_eq!(WorkTimeLogic::total_worked_ms(&store, "E2").unwrap(), HOUR_MS);
    }

    #[test]
    fn daily_summaries_match_total() {
        let store = MemoryStore::new(&[
            ("E1", "2025-03-03T09:00:00+01:00"),
            ("E1", "2025-03-03T17:00:00+01:00"),
            ("E1", "2025-03-04T09:00:00+01:00"),
        ]);

        let days = WorkTimeLogic::daily_summaries(&store, "E1").unwrap();
        assert_eq!(
            days,
            vec![
                DaySummary {
                    date: date("2025-03-03"),
                    bookings: 2,
                    valid: true,
                    worked_ms: 8 * HOUR_MS,
                },
                DaySummary {
                    date: date("2025-03-04"),
                    bookings: 1,
                    valid: false,
                    worked_ms: 0,
                },
            ]
        );

        let sum: i64 = days.iter().map(|d| d.worked_ms).sum();
        assert_eq!(sum, WorkTimeLogic::total_worked_ms(&store, "E1").unwrap());
    }

    #[test]
    fn groups_by_each_bookings_own_offset() {
        // Same UTC day, but the +09:00 booking falls on the 4th locally,
        // which splits an otherwise valid pair into two singleton days.
        let store = MemoryStore::new(&[
            ("E1", "2025-03-03T20:00:00+00:00"),
            ("E1", "2025-03-04T06:00:00+09:00"),
        ]);
        assert_eq!(WorkTimeLogic::total_worked_ms(&store, "E1").unwrap(), 0);

        // Different offsets on the same local date still pair.
        let store = MemoryStore::new(&[
            ("E1", "2025-03-03T09:00:00+01:00"),
            ("E1", "2025-03-03T17:00:00+02:00"),
        ]);
        assert_eq!(
            WorkTimeLogic::total_worked_ms(&store, "E1").unwrap(),
            7 * HOUR_MS
        );
    }

    #[test]
    fn is_idempotent() {
        let store = MemoryStore::new(&[
            ("E1", "2025-03-03T09:00:00Z"),
            ("E1", "2025-03-03T17:00:00Z"),
        ]);
        let first = WorkTimeLogic::total_worked_ms(&store, "E1").unwrap();
        let second = WorkTimeLogic::total_worked_ms(&store, "E1").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn activity_on_day_uses_reference_zone_bounds() {
        let store = MemoryStore::new(&[
            ("E1", "2025-03-03T00:00:00+01:00"),
            ("E1", "2025-03-04T23:59:59.999999+01:00"),
        ]);
        let zone = ReferenceZone::parse("+01:00").unwrap();

        assert!(WorkTimeLogic::has_activity_on_day(&store, "E1", date("2025-03-03"), zone).unwrap());
        assert!(WorkTimeLogic::has_activity_on_day(&store, "E1", date("2025-03-04"), zone).unwrap());
        assert!(!WorkTimeLogic::has_activity_on_day(&store, "E1", date("2025-03-05"), zone).unwrap());
        assert!(!WorkTimeLogic::has_activity_on_day(&store, "E2", date("2025-03-03"), zone).unwrap());

        // Seen from UTC, the midnight booking belongs to the 2nd.
        let utc = ReferenceZone::parse("Z").unwrap();
        assert!(WorkTimeLogic::has_activity_on_day(&store, "E1", date("2025-03-02"), utc).unwrap());
    }

    #[test]
    fn store_failures_propagate() {
        let err = WorkTimeLogic::total_worked_ms(&BrokenStore, "E1").unwrap_err();
        assert!(matches!(err, AppError::Other(_)));

        let zone = ReferenceZone::parse("Z").unwrap();
        assert!(
            WorkTimeLogic::has_activity_on_day(&BrokenStore, "E1", date("2025-03-03"), zone)
                .is_err()
        );
    }
}
