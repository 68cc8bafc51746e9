use time::{OffsetDateTime, UtcOffset};

use crate::activity::repo::ActivityEntry;
use crate::food::repo::FoodEntry;

/// Anything carrying a creation instant. Lets the same-day filter run over
/// food and activity records alike.
pub trait Timestamped {
    fn created_at(&self) -> OffsetDateTime;
}

impl Timestamped for FoodEntry {
    fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }
}

impl Timestamped for ActivityEntry {
    fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }
}

/// Same calendar date in UTC, not a rolling 24-hour window.
pub fn is_same_day(instant: OffsetDateTime, reference: OffsetDateTime) -> bool {
    instant.to_offset(UtcOffset::UTC).date() == reference.to_offset(UtcOffset::UTC).date()
}

/// Records created on the same UTC calendar day as `reference`. The
/// reference instant is always threaded in explicitly so callers (and
/// tests) never depend on the wall clock. Every "today" view goes through
/// this one filter.
pub fn same_day<T: Timestamped>(records: &[T], reference: OffsetDateTime) -> Vec<&T> {
    records
        .iter()
        .filter(|r| is_same_day(r.created_at(), reference))
        .collect()
}

#[cfg(test)]
mod day_tests {
    use super::*;
    use time::macros::datetime;
    use uuid::Uuid;

    fn food_at(created_at: OffsetDateTime) -> FoodEntry {
        FoodEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "test".into(),
            calories: 100,
            meal_type: "lunch".into(),
            created_at,
        }
    }

    #[test]
    fn keeps_records_on_the_reference_date() {
        let reference = datetime!(2025-03-10 12:00:00 UTC);
        let records = vec![
            food_at(datetime!(2025-03-10 00:00:00 UTC)),
            food_at(datetime!(2025-03-10 23:59:59.999 UTC)),
            food_at(datetime!(2025-03-09 23:59:59.999 UTC)),
            food_at(datetime!(2025-03-11 00:00:00 UTC)),
        ];
        let kept = same_day(&records, reference);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn millisecond_around_midnight() {
        let reference = datetime!(2025-03-10 00:00:00 UTC);
        assert!(is_same_day(datetime!(2025-03-10 00:00:00.001 UTC), reference));
        assert!(!is_same_day(datetime!(2025-03-09 23:59:59.999 UTC), reference));
    }

    #[test]
    fn compares_in_utc_regardless_of_offset() {
        // 23:30 at +02:00 is 21:30 UTC, still the 10th.
        let reference = datetime!(2025-03-10 12:00:00 UTC);
        assert!(is_same_day(datetime!(2025-03-10 23:30:00 +02:00), reference));
        // 01:30 at +02:00 on the 11th is 23:30 UTC on the 10th.
        assert!(is_same_day(datetime!(2025-03-11 01:30:00 +02:00), reference));
    }

    #[test]
    fn not_a_rolling_window() {
        // 20 hours apart but different calendar dates.
        let reference = datetime!(2025-03-10 02:00:00 UTC);
        assert!(!is_same_day(datetime!(2025-03-09 22:00:00 UTC), reference));
    }
}
