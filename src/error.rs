use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("DataError: {0}")]
    Data(#[from] DataError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Input error: {0}")]
    Input(String),
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("no data file for {city} at {path}")]
    SourceNotFound { city: String, path: String },
    #[error("failed to read {path}")]
    SourceUnreadable {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("{path}: missing required column '{column}'")]
    MissingColumn { path: String, column: String },
    #[error("{path}: row {row}: invalid {column} value '{value}'")]
    InvalidValue {
        path: String,
        row: usize,
        column: String,
        value: String,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration key '{key}'")]
    UnknownKey { key: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

impl AppError {
    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Data(DataError::SourceNotFound { .. }) => Some(
                "point --data-dir (or 'config set data_dir <path>') at the directory \
                 containing the city CSV files"
                    .to_string(),
            ),
            AppError::Data(DataError::MissingColumn { .. }) => {
                Some("the file does not look like a bikeshare trip export".to_string())
            }
            AppError::Config(ConfigError::UnknownKey { .. }) => {
                Some("valid keys are 'data_dir' and 'default_city'".to_string())
            }
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("fix or delete config.toml, then run 'config set' again".to_string())
            }
            _ => None,
        }
    }
}
