/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/
use crate::utils::config::get_env_or_default;
use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// The log level is taken from the `LOGLEVEL` environment variable
/// (trace, debug, info, warn, error; default: info). Calling this more than
/// once is safe; only the first call installs the subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = get_env_or_default("LOGLEVEL", String::from("info"));
        let level = match level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    });
}
