//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize logging with a default filter such as `"info"` or `"rink_engine=debug"`
///
/// `RUST_LOG` still takes precedence when it is set. Returns an error if a
/// logger was already installed.
pub fn init_with_filter(filter: &str) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).try_init()
}
