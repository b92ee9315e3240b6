//! Timer configuration: the four durations/counts that shape a pomodoro
//! cycle, validated at construction so a `Config` in hand is always usable.

use thiserror::Error;

/// An invalid timer configuration.
///
/// Raised only by [`Config::new`]; once a `Config` exists, no operation on
/// the widget can fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A phase duration was zero; every phase must last at least one second.
    #[error("{0} must be at least one second")]
    ZeroDuration(&'static str),
    /// The cycle length was zero; at least one work phase must precede a
    /// long rest.
    #[error("cycles_before_long_rest must be at least 1")]
    ZeroCycles,
}

/// The timer's immutable parameters.
///
/// Fields are private so that every `Config` has passed validation. The
/// default is the classic 25/5/15-minute setup with a long rest every
/// fourth work phase.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pomodoro::Config;
///
/// let config = Config::new(1500, 300, 900, 4).unwrap();
/// assert_eq!(config.work_secs(), 1500);
/// assert_eq!(config, Config::default());
///
/// assert!(Config::new(0, 300, 900, 4).is_err());
/// assert!(Config::new(1500, 300, 900, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig")
)]
pub struct Config {
    work_secs: u64,
    short_rest_secs: u64,
    long_rest_secs: u64,
    cycles_before_long_rest: u32,
}

impl Config {
    /// Builds a configuration, rejecting zero durations and a zero cycle
    /// count.
    ///
    /// # Arguments
    ///
    /// * `work_secs` - Length of a work phase, in seconds
    /// * `short_rest_secs` - Length of a short rest, in seconds
    /// * `long_rest_secs` - Length of a long rest, in seconds
    /// * `cycles_before_long_rest` - Work phases per long rest, at least 1
    pub fn new(
        work_secs: u64,
        short_rest_secs: u64,
        long_rest_secs: u64,
        cycles_before_long_rest: u32,
    ) -> Result<Self, ConfigError> {
        if work_secs == 0 {
            return Err(ConfigError::ZeroDuration("work_secs"));
        }
        if short_rest_secs == 0 {
            return Err(ConfigError::ZeroDuration("short_rest_secs"));
        }
        if long_rest_secs == 0 {
            return Err(ConfigError::ZeroDuration("long_rest_secs"));
        }
        if cycles_before_long_rest == 0 {
            return Err(ConfigError::ZeroCycles);
        }
        Ok(Self {
            work_secs,
            short_rest_secs,
            long_rest_secs,
            cycles_before_long_rest,
        })
    }

    /// Length of a work phase, in seconds.
    pub fn work_secs(&self) -> u64 {
        self.work_secs
    }

    /// Length of a short rest, in seconds.
    pub fn short_rest_secs(&self) -> u64 {
        self.short_rest_secs
    }

    /// Length of a long rest, in seconds.
    pub fn long_rest_secs(&self) -> u64 {
        self.long_rest_secs
    }

    /// Number of work phases per long rest.
    pub fn cycles_before_long_rest(&self) -> u32 {
        self.cycles_before_long_rest
    }
}

impl Default for Config {
    /// The classic setup: 25 minutes of work, 5-minute short rests, a
    /// 15-minute long rest every fourth cycle.
    fn default() -> Self {
        Self {
            work_secs: 25 * 60,
            short_rest_secs: 5 * 60,
            long_rest_secs: 15 * 60,
            cycles_before_long_rest: 4,
        }
    }
}

/// Mirror of [`Config`] used to route deserialized values through
/// [`Config::new`], keeping the validation invariant.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawConfig {
    work_secs: u64,
    short_rest_secs: u64,
    long_rest_secs: u64,
    cycles_before_long_rest: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Config::new(
            raw.work_secs,
            raw.short_rest_secs,
            raw.long_rest_secs,
            raw.cycles_before_long_rest,
        )
    }
}
