//! Total and mean trip duration

use crate::core::trips::TripTable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total_secs: f64,
    pub mean_secs: f64,
}

impl DurationStats {
    /// Sum and arithmetic mean of the duration column, in seconds.
    /// `None` for an empty table.
    pub fn compute(table: &TripTable) -> Option<DurationStats> {
        if table.is_empty() {
            return None;
        }

        let total_secs: f64 = table.trips().iter().map(|t| t.duration_secs).sum();
        Some(DurationStats {
            total_secs,
            mean_secs: total_secs / table.len() as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filters::City;
    use crate::core::stats::test_support::trip;
    use crate::core::trips::TripTable;

    #[test]
    fn test_total_and_mean() {
        // The two-row scenario: 100s + 300s.
        let table = TripTable::from_trips(
            City::Chicago,
            vec![
                trip("2017-06-23 15:09:32", 100.0, "A", "B"),
                trip("2017-06-24 09:00:00", 300.0, "A", "B"),
            ],
        );

        let stats = DurationStats::compute(&table).expect("non-empty table");
        assert_eq!(stats.total_secs, 400.0);
        assert_eq!(stats.mean_secs, 200.0);
    }

    #[test]
    fn test_mean_is_total_over_count() {
        let durations = [321.0, 1610.5, 416.0, 586.25, 89.0];
        let trips = durations
            .iter()
            .map(|d| trip("2017-06-23 15:09:32", *d, "A", "B"))
            .collect();
        let table = TripTable::from_trips(City::Chicago, trips);

        let stats = DurationStats::compute(&table).expect("non-empty table");
        let expected_mean = stats.total_secs / table.len() as f64;
        assert!((stats.mean_secs - expected_mean).abs() < 1e-9);
    }

    #[test]
    fn test_empty_table_yields_none() {
        let table = TripTable::from_trips(City::Chicago, vec![]);
        assert!(DurationStats::compute(&table).is_none());
    }
}
