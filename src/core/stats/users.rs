//! User demographics: type counts, gender counts and birth-year aggregates
//!
//! Gender and birth year are a per-city capability; Washington's export has
//! neither column, so its demographics come back as `None` rather than as a
//! pile of empty counts.

use std::collections::BTreeMap;

use crate::core::stats::mode_count;
use crate::core::trips::TripTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    pub gender_counts: BTreeMap<String, u64>,
    /// `None` when every birth-year value in the table is missing.
    pub birth_year: Option<BirthYearStats>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_type_counts: BTreeMap<String, u64>,
    /// `None` for cities whose export lacks the demographic columns.
    pub demographics: Option<Demographics>,
}

impl UserStats {
    /// Counts per category, with missing values excluded rather than counted
    /// as a category of their own. `None` for an empty table.
    pub fn compute(table: &TripTable) -> Option<UserStats> {
        if table.is_empty() {
            return None;
        }
        let trips = table.trips();

        let mut user_type_counts = BTreeMap::new();
        for user_type in trips.iter().filter_map(|t| t.user_type.as_deref()) {
            *user_type_counts.entry(user_type.to_string()).or_insert(0) += 1;
        }

        let demographics = table.city().has_demographics().then(|| {
            let mut gender_counts = BTreeMap::new();
            for gender in trips.iter().filter_map(|t| t.gender.as_deref()) {
                *gender_counts.entry(gender.to_string()).or_insert(0) += 1;
            }

            let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
            let birth_year = match (years.iter().min(), years.iter().max()) {
                (Some(&earliest), Some(&latest)) => {
                    mode_count(years.iter().copied()).map(|(most_common, _)| BirthYearStats {
                        earliest,
                        latest,
                        most_common,
                    })
                }
                _ => None,
            };

            Demographics {
                gender_counts,
                birth_year,
            }
        });

        Some(UserStats {
            user_type_counts,
            demographics,
        })
    }
}
