//! Fixed filter domains: city, month and day-of-week
//!
//! User input only reaches the loader as one of these enums, so an invalid
//! city or month is rejected at parse time instead of deep inside the
//! analysis pipeline.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use crate::error::CliError;

/// Cities with published trip data, each backed by one CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// File name of the city's dataset inside the data directory.
    pub fn data_file(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Washington's export carries no Gender / Birth Year columns.
    pub fn has_demographics(&self) -> bool {
        !matches!(self, City::Washington)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for City {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" | "new york" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            other => Err(CliError::InvalidArguments(format!(
                "unknown city '{}' (expected chicago, new york city or washington)",
                other
            ))),
        }
    }
}

/// Calendar months, January = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_number(n: u32) -> Option<Month> {
        Month::ALL.get(n.checked_sub(1)? as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Month::ALL
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| {
                CliError::InvalidArguments(format!(
                    "unknown month '{}' (expected a month name like June, or 'all')",
                    wanted
                ))
            })
    }
}

/// Month filter: either a single month or no month restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn matches(self, month_number: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(month) => month.number() == month_number,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all months"),
            MonthFilter::Only(month) => f.write_str(month.name()),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(MonthFilter::All)
        } else {
            Ok(MonthFilter::Only(s.parse()?))
        }
    }
}

/// Day-of-week filter: either a single weekday or no day restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn matches(self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(wanted) => wanted == day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all days"),
            DayFilter::Only(day) => f.write_str(weekday_name(*day)),
        }
    }
}

impl FromStr for DayFilter {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("all") {
            return Ok(DayFilter::All);
        }
        wanted
            .parse::<Weekday>()
            .map(DayFilter::Only)
            .map_err(|_| {
                CliError::InvalidArguments(format!(
                    "unknown day '{}' (expected a weekday name like Monday, or 'all')",
                    wanted
                ))
            })
    }
}

/// Full English weekday name; chrono's Display only yields "Mon".
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One validated set of session filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}
