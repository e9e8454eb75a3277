//! Storage layer
//!
//! Configuration file management (TOML in the platform config directory).

use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
