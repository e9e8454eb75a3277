//! Most frequent travel times: month, weekday and start hour

use chrono::Weekday;

use crate::core::filters::Month;
use crate::core::stats::mode_count;
use crate::core::trips::TripTable;

const WEEKDAY_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    pub common_month: Month,
    pub common_weekday: Weekday,
    pub common_hour: u32,
}

impl TimeStats {
    /// Modes of the three derived columns. `None` for an empty table.
    pub fn compute(table: &TripTable) -> Option<TimeStats> {
        let trips = table.trips();

        let common_month = mode_count(trips.iter().map(|t| t.month))
            .and_then(|(month, _)| Month::from_number(month))?;
        let common_weekday = mode_count(trips.iter().map(|t| t.weekday.num_days_from_monday()))
            .map(|(day, _)| WEEKDAY_ORDER[day as usize])?;
        let common_hour = mode_count(trips.iter().map(|t| t.hour)).map(|(hour, _)| hour)?;

        Some(TimeStats {
            common_month,
            common_weekday,
            common_hour,
        })
    }
}
