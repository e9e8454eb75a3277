//! Statistic groups computed over a filtered trip table
//!
//! Each analyzer is an independent consumer of the same table and returns a
//! plain result struct; all four return `None` for an empty table, which the
//! session controller rules out before calling them.

pub mod durations;
pub mod stations;
pub mod times;
pub mod users;

pub use durations::DurationStats;
pub use stations::StationStats;
pub use times::TimeStats;
pub use users::{BirthYearStats, Demographics, UserStats};

use std::collections::BTreeMap;

/// Most frequent value and its count. Ties break towards the smallest key
/// (calendar order for months, Monday-first for weekdays, numeric for hours,
/// lexicographic for station names), which keeps repeated runs deterministic.
pub(crate) fn mode_count<K, I>(values: I) -> Option<(K, u64)>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts: BTreeMap<K, u64> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(K, u64)> = None;
    for (key, count) in counts {
        match &best {
            Some((_, best_count)) if *best_count >= count => {}
            _ => best = Some((key, count)),
        }
    }
    best
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::trips::Trip;
    use chrono::{Datelike, NaiveDateTime, Timelike};

    /// Build a trip from a start timestamp plus the fields a test cares
    /// about; everything else gets a neutral default.
    pub fn trip(start: &str, duration_secs: f64, start_station: &str, end_station: &str) -> Trip {
        let start_time = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S")
            .expect("test timestamp must parse");
        Trip {
            start_time,
            end_time: start_time + chrono::Duration::seconds(duration_secs as i64),
            duration_secs,
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
        }
    }
}
