use comfy_table::{Attribute, Cell, Color, Table, presets};
use crossterm::terminal;

use crate::core::filters::{City, MonthFilter, weekday_name};
use crate::core::stats::{DurationStats, StationStats, TimeStats, UserStats};
use crate::utils::text::truncate_text_unicode;

/// Longest station name rendered before truncation kicks in.
const MAX_STATION_WIDTH: usize = 48;

/// Formatter for the four statistic groups
pub struct StatsDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl Default for StatsDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }

    /// Detect terminal width
    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _rows)) => {
                let width = cols as usize;
                // Clamp for stability on tiny or huge terminals
                if width < 40 {
                    Some(40)
                } else if width > 200 {
                    Some(200)
                } else {
                    Some(width)
                }
            }
            Err(_) => Some(80), // Default width
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn new_table(&self, headers: [&str; 2]) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
        if let Some(width) = self.max_width {
            table.set_width(width as u16);
        }

        if self.use_colors {
            table.set_header(vec![
                Cell::new(headers[0])
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan),
                Cell::new(headers[1])
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan),
            ]);
        } else {
            table.set_header(headers.to_vec());
        }
        table
    }

    /// Render the most frequent travel times table
    pub fn render_time_stats(&self, stats: &TimeStats) -> String {
        let mut table = self.new_table(["Statistic", "Value"]);
        table.add_row(vec!["Most common month", stats.common_month.name()]);
        table.add_row(vec![
            "Most common weekday",
            weekday_name(stats.common_weekday),
        ]);
        table.add_row(vec![
            "Most common start hour".to_string(),
            format!("{:02}:00", stats.common_hour),
        ]);
        table.to_string()
    }

    /// Render the most popular stations and route table
    pub fn render_station_stats(&self, stats: &StationStats) -> String {
        let mut table = self.new_table(["Statistic", "Value"]);
        table.add_row(vec![
            "Most common start station".to_string(),
            format!(
                "{} ({} trips)",
                truncate_text_unicode(&stats.common_start, MAX_STATION_WIDTH),
                stats.start_count
            ),
        ]);
        table.add_row(vec![
            "Most common end station".to_string(),
            format!(
                "{} ({} trips)",
                truncate_text_unicode(&stats.common_end, MAX_STATION_WIDTH),
                stats.end_count
            ),
        ]);
        table.add_row(vec![
            "Most common route".to_string(),
            format!(
                "{} -> {} ({} trips)",
                truncate_text_unicode(&stats.common_route.0, MAX_STATION_WIDTH),
                truncate_text_unicode(&stats.common_route.1, MAX_STATION_WIDTH),
                stats.route_count
            ),
        ]);
        table.to_string()
    }

    /// Render the trip duration table. The month filter only picks the
    /// label; the numbers were computed over the already-filtered table.
    pub fn render_duration_stats(&self, stats: &DurationStats, month: MonthFilter) -> String {
        let total_label = match month {
            MonthFilter::All => "Total travel time (all months)".to_string(),
            MonthFilter::Only(m) => format!("Total travel time in {}", m.name()),
        };

        let mut table = self.new_table(["Statistic", "Value"]);
        table.add_row(vec![
            total_label,
            format!(
                "{} ({} seconds)",
                format_duration(stats.total_secs),
                format_seconds(stats.total_secs)
            ),
        ]);
        table.add_row(vec![
            "Mean travel time".to_string(),
            format!(
                "{} ({} seconds)",
                format_duration(stats.mean_secs),
                format_seconds(stats.mean_secs)
            ),
        ]);
        table.to_string()
    }

    /// Render the user statistics tables; demographics are reported as not
    /// available for cities without those columns.
    pub fn render_user_stats(&self, stats: &UserStats, city: City) -> String {
        let mut sections = Vec::new();

        let mut user_types = self.new_table(["User type", "Trips"]);
        for (user_type, count) in &stats.user_type_counts {
            user_types.add_row(vec![user_type.clone(), count.to_string()]);
        }
        sections.push(user_types.to_string());

        match &stats.demographics {
            Some(demographics) => {
                let mut genders = self.new_table(["Gender", "Trips"]);
                for (gender, count) in &demographics.gender_counts {
                    genders.add_row(vec![gender.clone(), count.to_string()]);
                }
                sections.push(genders.to_string());

                match &demographics.birth_year {
                    Some(birth_year) => {
                        let mut years = self.new_table(["Birth year", "Value"]);
                        years.add_row(vec![
                            "Earliest".to_string(),
                            birth_year.earliest.to_string(),
                        ]);
                        years.add_row(vec!["Latest".to_string(), birth_year.latest.to_string()]);
                        years.add_row(vec![
                            "Most common".to_string(),
                            birth_year.most_common.to_string(),
                        ]);
                        sections.push(years.to_string());
                    }
                    None => sections.push("No birth year data in the selection.".to_string()),
                }
            }
            None => sections.push(format!(
                "The breakdown on Gender and Birth Year is not available for {}.",
                city
            )),
        }

        sections.join("\n")
    }
}

/// Render seconds as `[Nd ]HH:MM:SS`, rounding to whole seconds.
pub fn format_duration(secs: f64) -> String {
    let total = secs.round().max(0.0) as u64;
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    if days > 0 {
        format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Seconds with decimals only when they carry information.
fn format_seconds(secs: f64) -> String {
    if secs.fract() == 0.0 {
        format!("{:.0}", secs)
    } else {
        format!("{:.2}", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filters::Month;
    use crate::core::stats::{BirthYearStats, Demographics};
    use chrono::Weekday;
    use std::collections::BTreeMap;

    fn plain_display() -> StatsDisplay {
        StatsDisplay::new().with_colors(false).with_max_width(120)
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "00:00:00");
        assert_eq!(format_duration(400.0), "00:06:40");
        assert_eq!(format_duration(3_661.0), "01:01:01");
        assert_eq!(format_duration(90_061.0), "1d 01:01:01");
        // Rounds rather than truncates.
        assert_eq!(format_duration(59.6), "00:01:00");
    }

    #[test]
    fn test_time_stats_render_contains_values() {
        let rendered = plain_display().render_time_stats(&TimeStats {
            common_month: Month::June,
            common_weekday: Weekday::Fri,
            common_hour: 15,
        });

        assert!(rendered.contains("June"));
        assert!(rendered.contains("Friday"));
        assert!(rendered.contains("15:00"));
    }

    #[test]
    fn test_duration_render_labels_follow_month_filter() {
        let stats = DurationStats {
            total_secs: 400.0,
            mean_secs: 200.0,
        };

        let all = plain_display().render_duration_stats(&stats, MonthFilter::All);
        assert!(all.contains("all months"));
        assert!(all.contains("400 seconds"));

        let june =
            plain_display().render_duration_stats(&stats, MonthFilter::Only(Month::June));
        assert!(june.contains("in June"));
        assert!(june.contains("00:03:20"));
    }

    #[test]
    fn test_user_stats_render_without_demographics() {
        let stats = UserStats {
            user_type_counts: BTreeMap::from([("Subscriber".to_string(), 2)]),
            demographics: None,
        };

        let rendered = plain_display().render_user_stats(&stats, City::Washington);
        assert!(rendered.contains("Subscriber"));
        assert!(rendered.contains("not available for Washington"));
    }

    #[test]
    fn test_user_stats_render_with_demographics() {
        let stats = UserStats {
            user_type_counts: BTreeMap::from([("Customer".to_string(), 1)]),
            demographics: Some(Demographics {
                gender_counts: BTreeMap::from([("Female".to_string(), 1)]),
                birth_year: Some(BirthYearStats {
                    earliest: 1981,
                    latest: 1992,
                    most_common: 1992,
                }),
            }),
        };

        let rendered = plain_display().render_user_stats(&stats, City::Chicago);
        assert!(rendered.contains("Female"));
        assert!(rendered.contains("1981"));
        assert!(rendered.contains("Most common"));
    }
}
