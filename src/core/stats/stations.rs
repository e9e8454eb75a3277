//! Most popular stations and the most popular (start, end) route

use crate::core::stats::mode_count;
use crate::core::trips::TripTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub common_start: String,
    pub start_count: u64,
    pub common_end: String,
    pub end_count: u64,
    pub common_route: (String, String),
    pub route_count: u64,
}

impl StationStats {
    /// Modes of the start-station, end-station and route columns. Route ties
    /// break towards the lexicographically smallest (start, end) pair.
    /// `None` for an empty table.
    pub fn compute(table: &TripTable) -> Option<StationStats> {
        let trips = table.trips();

        let (common_start, start_count) =
            mode_count(trips.iter().map(|t| t.start_station.clone()))?;
        let (common_end, end_count) = mode_count(trips.iter().map(|t| t.end_station.clone()))?;
        let (common_route, route_count) = mode_count(
            trips
                .iter()
                .map(|t| (t.start_station.clone(), t.end_station.clone())),
        )?;

        Some(StationStats {
            common_start,
            start_count,
            common_end,
            end_count,
            common_route,
            route_count,
        })
    }
}
