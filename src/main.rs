use bikeshare_cli::cli::dispatcher::Dispatcher;
use bikeshare_cli::cli::main_types::Cli;
use bikeshare_cli::storage::config::Config;
use clap::Parser;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    if cli.verbose {
        println!("Verbose mode is enabled");

        if let Some(config_dir) = &cli.config_dir {
            println!("Using config directory: {}", config_dir);
        }

        if let Some(data_dir) = &cli.data_dir {
            println!("Using data directory: {}", data_dir);
        }
    }

    // Create dispatcher
    let dispatcher = Dispatcher::new(
        config,
        config_path,
        cli.data_dir.map(PathBuf::from),
        cli.verbose,
    );

    // Execute the command
    if let Err(e) = dispatcher.dispatch(cli.command) {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}
