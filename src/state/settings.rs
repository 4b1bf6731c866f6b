//! User-facing timer settings, expressed in minutes

use serde::{Deserialize, Serialize};

use super::timer_config::TimerConfiguration;
use crate::error::TimerError;

/// Inclusive range with a step, as offered by a slider control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderBounds {
    pub min: u64,
    pub max: u64,
    pub step: u64,
}

impl SliderBounds {
    pub const fn new(min: u64, max: u64, step: u64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: u64) -> bool {
        value >= self.min && value <= self.max && (value - self.min) % self.step == 0
    }
}

pub const WORK_MINUTES_BOUNDS: SliderBounds = SliderBounds::new(10, 90, 5);
pub const BREAK_MINUTES_BOUNDS: SliderBounds = SliderBounds::new(5, 30, 1);
pub const ROUNDS_BOUNDS: SliderBounds = SliderBounds::new(1, 5, 1);

/// Settings as edited by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    pub work_minutes: u64,
    pub break_minutes: u64,
    pub rounds: u32,
}

impl TimerSettings {
    /// Check every value against its slider bounds
    pub fn validate(&self) -> Result<(), TimerError> {
        check("work_minutes", self.work_minutes, &WORK_MINUTES_BOUNDS)?;
        check("break_minutes", self.break_minutes, &BREAK_MINUTES_BOUNDS)?;
        check("rounds", u64::from(self.rounds), &ROUNDS_BOUNDS)?;
        Ok(())
    }

    /// Validate and convert into an engine configuration
    pub fn to_configuration(&self) -> Result<TimerConfiguration, TimerError> {
        self.validate()?;
        TimerConfiguration::from_minutes(self.work_minutes, self.break_minutes, self.rounds)
    }

    /// Settings view of an engine configuration, rounded down to whole minutes
    pub fn from_configuration(configuration: &TimerConfiguration) -> Self {
        Self {
            work_minutes: configuration.work_duration_seconds() / 60,
            break_minutes: configuration.break_duration_seconds() / 60,
            rounds: configuration.total_rounds(),
        }
    }
}

fn check(name: &str, value: u64, bounds: &SliderBounds) -> Result<(), TimerError> {
    if bounds.contains(value) {
        Ok(())
    } else {
        Err(TimerError::InvalidConfiguration(format!(
            "{} must be between {} and {} in steps of {}, got {}",
            name, bounds.min, bounds.max, bounds.step, value
        )))
    }
}
