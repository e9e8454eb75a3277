//! Trip table loading and filtering
//!
//! One CSV file per city. Columns are resolved by header name so the loader
//! tolerates column reordering; a missing required column is a schema error.
//! The three derived attributes (month, weekday, hour) are computed from the
//! start timestamp once, at load time.

use std::path::Path;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use csv::StringRecord;

use crate::core::filters::{City, DayFilter, MonthFilter};
use crate::error::DataError;

/// Timestamp layout used by all three city exports.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const COL_START_TIME: &str = "Start Time";
const COL_END_TIME: &str = "End Time";
const COL_TRIP_DURATION: &str = "Trip Duration";
const COL_START_STATION: &str = "Start Station";
const COL_END_STATION: &str = "End Station";
const COL_USER_TYPE: &str = "User Type";
const COL_GENDER: &str = "Gender";
const COL_BIRTH_YEAR: &str = "Birth Year";

/// One trip record, including the derived start-time attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Month of the start timestamp, January = 1.
    pub month: u32,
    /// Weekday of the start timestamp.
    pub weekday: Weekday,
    /// Hour of the start timestamp, 0-23.
    pub hour: u32,
}

/// In-memory trip collection for one city, after month/day filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    city: City,
    trips: Vec<Trip>,
}

impl TripTable {
    /// Load the dataset for `city` from `data_dir` and narrow it to the
    /// requested month and day.
    pub fn load(
        data_dir: &Path,
        city: City,
        month: MonthFilter,
        day: DayFilter,
    ) -> Result<TripTable, DataError> {
        let path = data_dir.join(city.data_file());
        let display_path = path.to_string_lossy().to_string();

        if !path.exists() {
            return Err(DataError::SourceNotFound {
                city: city.to_string(),
                path: display_path,
            });
        }

        let mut reader =
            csv::Reader::from_path(&path).map_err(|source| DataError::SourceUnreadable {
                path: display_path.clone(),
                source,
            })?;

        let headers = reader
            .headers()
            .map_err(|source| DataError::SourceUnreadable {
                path: display_path.clone(),
                source,
            })?
            .clone();
        let columns = ColumnIndex::resolve(&headers, &display_path)?;

        let mut trips = Vec::new();
        for (row_no, result) in reader.records().enumerate() {
            let record = result.map_err(|source| DataError::SourceUnreadable {
                path: display_path.clone(),
                source,
            })?;
            trips.push(parse_trip(&record, &columns, row_no, &display_path)?);
        }

        Ok(TripTable { city, trips }.filtered(month, day))
    }

    /// Narrow the table to rows matching `month` and `day`. Applying the
    /// same filter twice yields an identical table.
    pub fn filtered(&self, month: MonthFilter, day: DayFilter) -> TripTable {
        TripTable {
            city: self.city,
            trips: self
                .trips
                .iter()
                .filter(|t| month.matches(t.month) && day.matches(t.weekday))
                .cloned()
                .collect(),
        }
    }

    pub(crate) fn from_trips(city: City, trips: Vec<Trip>) -> TripTable {
        TripTable { city, trips }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

/// Header positions of the known columns; Gender / Birth Year are a
/// per-file property and may be absent entirely.
struct ColumnIndex {
    start_time: usize,
    end_time: usize,
    duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, path: &str) -> Result<ColumnIndex, DataError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| DataError::MissingColumn {
                path: path.to_string(),
                column: name.to_string(),
            })
        };

        Ok(ColumnIndex {
            start_time: require(COL_START_TIME)?,
            end_time: require(COL_END_TIME)?,
            duration: require(COL_TRIP_DURATION)?,
            start_station: require(COL_START_STATION)?,
            end_station: require(COL_END_STATION)?,
            user_type: require(COL_USER_TYPE)?,
            gender: find(COL_GENDER),
            birth_year: find(COL_BIRTH_YEAR),
        })
    }
}

fn parse_trip(
    record: &StringRecord,
    columns: &ColumnIndex,
    row_no: usize,
    path: &str,
) -> Result<Trip, DataError> {
    let field = |idx: usize| record.get(idx).unwrap_or("").trim();
    let invalid = |column: &str, value: &str| DataError::InvalidValue {
        path: path.to_string(),
        row: row_no,
        column: column.to_string(),
        value: value.to_string(),
    };

    let start_raw = field(columns.start_time);
    let start_time = NaiveDateTime::parse_from_str(start_raw, TIMESTAMP_FORMAT)
        .map_err(|_| invalid(COL_START_TIME, start_raw))?;

    let end_raw = field(columns.end_time);
    let end_time = NaiveDateTime::parse_from_str(end_raw, TIMESTAMP_FORMAT)
        .map_err(|_| invalid(COL_END_TIME, end_raw))?;

    let duration_raw = field(columns.duration);
    let duration_secs = duration_raw
        .parse::<f64>()
        .map_err(|_| invalid(COL_TRIP_DURATION, duration_raw))?;

    // Birth years are exported as floats ("1992.0"); accept both forms.
    let birth_year = match columns.birth_year.map(field) {
        None | Some("") => None,
        Some(raw) => Some(
            raw.parse::<f64>()
                .map_err(|_| invalid(COL_BIRTH_YEAR, raw))? as i32,
        ),
    };

    Ok(Trip {
        start_time,
        end_time,
        duration_secs,
        start_station: field(columns.start_station).to_string(),
        end_station: field(columns.end_station).to_string(),
        user_type: non_empty(field(columns.user_type)),
        gender: columns.gender.and_then(|idx| non_empty(field(idx))),
        birth_year,
        month: start_time.month(),
        weekday: start_time.weekday(),
        hour: start_time.hour(),
    })
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
