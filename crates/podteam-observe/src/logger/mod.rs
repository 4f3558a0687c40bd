mod config;
mod error;
mod log;
mod object;

pub use config::{
    ENV_LOG_COLOR, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_LOG_TARGETS, ENV_LOG_TZ, LoggerConfig,
};
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel, LoggerTimeZone, LoggerTimestamp};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Can only succeed once per process.
///
/// With [`LoggerTimeZone::Local`] the offset is resolved here, so call this from
/// `main()` before any threads are spawned; otherwise timestamps fall back to UTC.
///
/// # Examples
/// ```rust
/// use podteam_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::from_env().expect("invalid logger environment");
/// init_logger(&config).expect("failed to initialize logger");
///
/// tracing::info!("logger initialized");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => log::logger_text(cfg),
        LoggerFormat::Json => log::logger_json(cfg),
        LoggerFormat::Journald => log::logger_journald(cfg),
    }
}
