use clap::{Parser, Subcommand};

use crate::core::filters::{City, DayFilter, MonthFilter};

#[derive(Parser)]
#[command(name = "bikeshare-cli")]
#[command(about = "Command line tool for exploring US bikeshare trip data")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Directory containing the city CSV files
    #[arg(long, global = true, env = "BIKESHARE_DATA_DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive exploration session
    Explore,
    /// One-shot statistics for a city
    Stats {
        /// City to analyze (chicago, new york city, washington)
        #[arg(long)]
        city: City,
        /// Month to filter by, or "all"
        #[arg(long, default_value = "all")]
        month: MonthFilter,
        /// Weekday to filter by, or "all"
        #[arg(long, default_value = "all")]
        day: DayFilter,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key (data_dir, default_city)
        key: String,
        /// Configuration value
        value: String,
    },
}
