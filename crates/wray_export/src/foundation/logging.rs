//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize logging with a default filter such as `"info"` or `"wray_export=debug"`
///
/// `RUST_LOG` still wins when it is set. Calling this more than once is harmless;
/// later calls are ignored.
pub fn init_with_level(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized, keeping existing configuration");
    }
}

/// Initialize logging with the level named in an export configuration
pub fn init_from_config(config: &crate::core::ExportConfig) {
    init_with_level(&config.log_level);
}
