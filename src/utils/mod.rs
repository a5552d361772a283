/// Environment variable helpers
pub mod config;
/// Logging setup
pub mod logger;

pub use logger::setup_logger;
