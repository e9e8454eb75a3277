use std::path::PathBuf;
use std::time::Instant;

use crate::cli::main_types::{Commands, ConfigCommands};
use crate::cli::prompts;
use crate::core::filters::Filters;
use crate::core::stats::{DurationStats, StationStats, TimeStats, UserStats};
use crate::core::trips::TripTable;
use crate::display::StatsDisplay;
use crate::error::AppError;
use crate::storage::config::Config;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    verbose: bool,
}

impl Dispatcher {
    // Instance method for verbose logging
    fn log_verbose(&self, msg: &str) {
        if self.verbose {
            println!("Verbose: {}", msg);
        }
    }

    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        data_dir: Option<PathBuf>,
        verbose: bool,
    ) -> Self {
        Self {
            config,
            config_path,
            data_dir,
            verbose,
        }
    }

    pub fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Explore => self.handle_explore(),
            Commands::Stats { city, month, day } => self.run_session(&Filters { city, month, day }),
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    /// Resolution order: --data-dir flag/env, config file, current directory.
    fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| self.config.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Session loop: collect filters, analyze, offer to restart.
    fn handle_explore(&self) -> Result<(), AppError> {
        println!("Hello! Let's explore some US bikeshare data!");

        loop {
            match prompts::collect_filters()? {
                Some(filters) => self.run_session(&filters)?,
                None => break, // stdin closed while collecting
            }

            if !prompts::confirm_restart()? {
                break;
            }
            println!();
        }

        Ok(())
    }

    fn run_session(&self, filters: &Filters) -> Result<(), AppError> {
        let data_dir = self.data_dir();
        self.log_verbose(&format!(
            "Loading {} from {}",
            filters.city.data_file(),
            data_dir.display()
        ));

        let started = Instant::now();
        let table = TripTable::load(&data_dir, filters.city, filters.month, filters.day)?;
        self.log_verbose(&format!(
            "Loaded {} trips in {:.4} seconds",
            table.len(),
            started.elapsed().as_secs_f64()
        ));

        if table.is_empty() {
            print_rule();
            println!("There is no data available for the given inputs");
            print_rule();
            return Ok(());
        }

        let display = StatsDisplay::new();

        println!("\nCalculating The Most Frequent Times of Travel...\n");
        let started = Instant::now();
        if let Some(stats) = TimeStats::compute(&table) {
            println!("{}", display.render_time_stats(&stats));
        }
        print_elapsed(started);

        println!("\nCalculating The Most Popular Stations and Trip...\n");
        let started = Instant::now();
        if let Some(stats) = StationStats::compute(&table) {
            println!("{}", display.render_station_stats(&stats));
        }
        print_elapsed(started);

        println!("\nCalculating Trip Duration...\n");
        let started = Instant::now();
        if let Some(stats) = DurationStats::compute(&table) {
            println!("{}", display.render_duration_stats(&stats, filters.month));
        }
        print_elapsed(started);

        println!("\nCalculating User Stats...\n");
        let started = Instant::now();
        if let Some(stats) = UserStats::compute(&table) {
            println!("{}", display.render_user_stats(&stats, filters.city));
        }
        print_elapsed(started);

        Ok(())
    }

    fn handle_config_command(&self, command: ConfigCommands) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                match &self.config.data_dir {
                    Some(dir) => println!("data_dir = {}", dir.display()),
                    None => println!("data_dir = (unset, using current directory)"),
                }
                match &self.config.default_city {
                    Some(city) => println!("default_city = {}", city),
                    None => println!("default_city = (unset)"),
                }
                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                self.log_verbose(&format!("Setting {} = {}", key, value));
                let mut config = self.config.clone();
                config.set(&key, &value)?;
                config.save(self.config_path.clone())?;
                println!("✅ Set {} = {}", key, value);
                Ok(())
            }
        }
    }
}

fn print_elapsed(started: Instant) {
    println!("\nThis took {:.4} seconds.", started.elapsed().as_secs_f64());
    print_rule();
}

fn print_rule() {
    println!("{}", "-".repeat(40));
}
