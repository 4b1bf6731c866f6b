//! Timer configuration value type

use serde::{Deserialize, Serialize};

use crate::error::TimerError;

pub const DEFAULT_WORK_MINUTES: u64 = 45;
pub const DEFAULT_BREAK_MINUTES: u64 = 15;
pub const DEFAULT_ROUNDS: u32 = 3;

/// Which interval is currently counting down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerMode {
    Work,
    Break,
}

impl TimerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerMode::Work => "Work",
            TimerMode::Break => "Break",
        }
    }
}

impl std::fmt::Display for TimerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durations and round count driving the engine.
///
/// Always holds positive durations and at least one round; the only way to
/// build one is through [`TimerConfiguration::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerConfiguration {
    work_duration_seconds: u64,
    break_duration_seconds: u64,
    total_rounds: u32,
}

impl TimerConfiguration {
    /// Validate and build a configuration from durations in seconds
    pub fn new(
        work_duration_seconds: u64,
        break_duration_seconds: u64,
        total_rounds: u32,
    ) -> Result<Self, TimerError> {
        if work_duration_seconds == 0 {
            return Err(TimerError::InvalidConfiguration(
                "work duration must be positive".to_string(),
            ));
        }
        if break_duration_seconds == 0 {
            return Err(TimerError::InvalidConfiguration(
                "break duration must be positive".to_string(),
            ));
        }
        if total_rounds < 1 {
            return Err(TimerError::InvalidConfiguration(
                "at least one round is required".to_string(),
            ));
        }

        Ok(Self {
            work_duration_seconds,
            break_duration_seconds,
            total_rounds,
        })
    }

    /// Build a configuration from durations in minutes
    pub fn from_minutes(
        work_minutes: u64,
        break_minutes: u64,
        total_rounds: u32,
    ) -> Result<Self, TimerError> {
        let to_seconds = |minutes: u64, what: &str| {
            minutes.checked_mul(60).ok_or_else(|| {
                TimerError::InvalidConfiguration(format!("{} duration is too large", what))
            })
        };
        Self::new(
            to_seconds(work_minutes, "work")?,
            to_seconds(break_minutes, "break")?,
            total_rounds,
        )
    }

    pub fn work_duration_seconds(&self) -> u64 {
        self.work_duration_seconds
    }

    pub fn break_duration_seconds(&self) -> u64 {
        self.break_duration_seconds
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    /// Full length of an interval of the given mode
    pub fn duration_for(&self, mode: TimerMode) -> u64 {
        match mode {
            TimerMode::Work => self.work_duration_seconds,
            TimerMode::Break => self.break_duration_seconds,
        }
    }
}

impl Default for TimerConfiguration {
    fn default() -> Self {
        Self {
            work_duration_seconds: DEFAULT_WORK_MINUTES * 60,
            break_duration_seconds: DEFAULT_BREAK_MINUTES * 60,
            total_rounds: DEFAULT_ROUNDS,
        }
    }
}
