//! Interactive filter collection
//!
//! Re-prompts until the input parses into its fixed domain. A closed stdin
//! is the abort sentinel: collection returns `None` and the session ends.

use std::io::{self, Write};
use std::str::FromStr;

use crate::core::filters::{City, DayFilter, Filters, MonthFilter};
use crate::error::{AppError, CliError};

const CITY_PROMPT: &str = "\
Bikeshare data is available for the cities
\t1. Chicago
\t2. New York City
\t3. Washington

Which city do you want to explore?
";

const MONTH_PROMPT: &str = "\
Would you like to filter by a particular month?
(type a month name like June, or 'all' for no month filter)
";

const DAY_PROMPT: &str = "\
Would you like to filter by a particular day?
(type a weekday name like Monday, or 'all' for no day filter)
";

/// Collect one validated filter triple; `None` means the user aborted.
pub fn collect_filters() -> Result<Option<Filters>, AppError> {
    let Some(city) = prompt_parsed::<City>(CITY_PROMPT, "City")? else {
        return Ok(None);
    };
    let Some(month) = prompt_parsed::<MonthFilter>(MONTH_PROMPT, "Month")? else {
        return Ok(None);
    };
    let Some(day) = prompt_parsed::<DayFilter>(DAY_PROMPT, "Day")? else {
        return Ok(None);
    };

    println!("{}", "-".repeat(40));
    Ok(Some(Filters { city, month, day }))
}

/// Ask whether to run another session; anything but "yes" ends the loop.
pub fn confirm_restart() -> Result<bool, AppError> {
    match prompt_line("\nWould you like to restart? Enter yes or no.\n")? {
        Some(answer) => Ok(answer.eq_ignore_ascii_case("yes")),
        None => Ok(false),
    }
}

fn prompt_parsed<T: FromStr>(prompt: &str, label: &str) -> Result<Option<T>, AppError> {
    loop {
        let Some(line) = prompt_line(prompt)? else {
            return Ok(None);
        };
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("\nThe entered {} value is invalid.\n", label),
        }
    }
}

fn prompt_line(prompt: &str) -> Result<Option<String>, AppError> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| CliError::Input(format!("failed to flush stdout: {}", e)))?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .map_err(|e| CliError::Input(format!("failed to read input: {}", e)))?;

    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
