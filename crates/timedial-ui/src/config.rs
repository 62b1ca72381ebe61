use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use timedial_format::{DisplayMode, DEFAULT_PATTERN};

use crate::style::IndicatorStyle;

const APP_DIR: &str = "timedial";
const APP_CONFIG_FILE: &str = "config.json";

/// Default tick interval when showing an absolute time.
pub const FORWARD_TICK_INTERVAL: Duration = Duration::from_millis(20);
/// Default tick interval when counting down.
pub const COUNTDOWN_TICK_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory: neither XDG_CONFIG_HOME nor HOME is set")]
    MissingHomeDirectory,
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Serializable mirror of [`DisplayMode`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplaySetting {
    Date,
    Duration,
}

impl From<DisplaySetting> for DisplayMode {
    fn from(s: DisplaySetting) -> Self {
        match s {
            DisplaySetting::Date => DisplayMode::Date,
            DisplaySetting::Duration => DisplayMode::Duration,
        }
    }
}

/// Everything needed to build a [`TimeIndicator`](crate::widgets::TimeIndicator).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub pattern: String,
    pub countdown: bool,
    /// Overrides the decomposition implied by `countdown`.
    pub display: Option<DisplaySetting>,
    /// Overrides the tick interval implied by `countdown`.
    pub tick_interval_ms: Option<u64>,
    /// Epoch millis (forward) or remaining millis (countdown).
    pub start_time: Option<i64>,
    pub style: IndicatorStyle,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            countdown: false,
            display: None,
            tick_interval_ms: None,
            start_time: None,
            style: IndicatorStyle::default(),
        }
    }
}

impl IndicatorConfig {
    pub fn display_mode(&self) -> DisplayMode {
        resolve_display_mode(self.countdown, self.display.map(Into::into))
    }

    pub fn tick_interval(&self) -> Duration {
        resolve_tick_interval(self.countdown, self.tick_interval_ms.map(Duration::from_millis))
    }

    /// Parses a config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        serde_json::from_str(&contents)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }
}

pub(crate) fn resolve_display_mode(countdown: bool, explicit: Option<DisplayMode>) -> DisplayMode {
    explicit.unwrap_or(if countdown { DisplayMode::Duration } else { DisplayMode::Date })
}

pub(crate) fn resolve_tick_interval(countdown: bool, explicit: Option<Duration>) -> Duration {
    explicit.unwrap_or(if countdown { COUNTDOWN_TICK_INTERVAL } else { FORWARD_TICK_INTERVAL })
}

/// Loads `config.json` from the user config directory.
///
/// Missing files yield defaults; unreadable or malformed files are logged and
/// also yield defaults.
pub fn load_config() -> IndicatorConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> IndicatorConfig {
    let path = match config_path(xdg_config_home, home) {
        Ok(p) => p,
        Err(err) => {
            log::debug!("{err}; using default config");
            return IndicatorConfig::default();
        }
    };
    if !path.exists() {
        return IndicatorConfig::default();
    }
    load_or_default(&path)
}

/// Parses `path`, falling back to defaults with a warning on failure.
pub fn load_or_default(path: &Path) -> IndicatorConfig {
    IndicatorConfig::from_path(path).unwrap_or_else(|err| {
        log::warn!("{err}: {}; using defaults", error_source(&err));
        IndicatorConfig::default()
    })
}

fn error_source(err: &ConfigError) -> String {
    std::error::Error::source(err).map(ToString::to_string).unwrap_or_default()
}

fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub fn config_path(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let root = match xdg_config_home.filter(|p| !p.as_os_str().is_empty()) {
        Some(xdg) => xdg.to_path_buf(),
        None => home.ok_or(ConfigError::MissingHomeDirectory)?.join(".config"),
    };
    Ok(root.join(APP_DIR).join(APP_CONFIG_FILE))
}
