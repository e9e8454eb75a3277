pub mod table;

pub use table::{StatsDisplay, format_duration};
