use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::logger::{
    error::{LoggerError, LoggerResult},
    object::{LoggerFormat, LoggerLevel, LoggerTimeZone},
};

/// Output format override (`text`, `json`, `journald`).
pub const ENV_LOG_FORMAT: &str = "PODTEAM_LOG_FORMAT";
/// Filter expression override (`info`, `podteam_core=debug,info`, ...).
pub const ENV_LOG_LEVEL: &str = "PODTEAM_LOG_LEVEL";
/// Timestamp timezone override (`utc`, `local`).
pub const ENV_LOG_TZ: &str = "PODTEAM_LOG_TZ";
/// Color override (`true`/`false`).
pub const ENV_LOG_COLOR: &str = "PODTEAM_LOG_COLOR";
/// Target display override (`true`/`false`).
pub const ENV_LOG_TARGETS: &str = "PODTEAM_LOG_TARGETS";

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Log level filter expression (e.g., "info", "podteam_core=debug,info").
    pub level: LoggerLevel,
    /// Timezone for timestamps.
    pub tz: LoggerTimeZone,
    /// Whether to include module/target names in log output.
    pub with_targets: bool,
    /// Whether to use colored output.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Default config with `PODTEAM_LOG_*` environment overrides applied.
    pub fn from_env() -> LoggerResult<Self> {
        let mut cfg = Self::default();
        cfg.apply_env(|var| std::env::var(var).ok())?;
        Ok(cfg)
    }

    /// Override fields from variables returned by `lookup`.
    ///
    /// Unset and blank variables leave the field untouched. Invalid values are
    /// errors rather than being ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> LoggerResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_LOG_FORMAT) {
            self.format = v.parse()?;
        }
        if let Some(v) = get(ENV_LOG_LEVEL) {
            self.level = v.parse()?;
        }
        if let Some(v) = get(ENV_LOG_TZ) {
            self.tz = v.parse()?;
        }
        if let Some(v) = get(ENV_LOG_COLOR) {
            self.use_color = parse_bool(ENV_LOG_COLOR, &v)?;
        }
        if let Some(v) = get(ENV_LOG_TARGETS) {
            self.with_targets = parse_bool(ENV_LOG_TARGETS, &v)?;
        }
        Ok(())
    }

    /// Color is used only when enabled in config and stdout is a terminal.
    ///
    /// Call at logger initialization time, not while parsing config.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}

fn parse_bool(var: &'static str, value: &str) -> LoggerResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LoggerError::InvalidEnv {
            var,
            value: value.to_string(),
        }),
    }
}
