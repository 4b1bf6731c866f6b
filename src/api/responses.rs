//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{
    settings::{SliderBounds, BREAK_MINUTES_BOUNDS, ROUNDS_BOUNDS, WORK_MINUTES_BOUNDS},
    TimerSettings, TimerSnapshot,
};

/// API response structure for timer command endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerSnapshot,
}

impl CommandResponse {
    /// Create a new command response, deriving the status from the timer
    pub fn new(message: String, timer: TimerSnapshot) -> Self {
        let status = if timer.running { "running" } else { "paused" };
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            timer,
        }
    }
}

/// Status response with timer and server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerSnapshot,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Slider bounds for every setting
#[derive(Debug, Clone, Serialize)]
pub struct SettingsBounds {
    pub work_minutes: SliderBounds,
    pub break_minutes: SliderBounds,
    pub rounds: SliderBounds,
}

impl Default for SettingsBounds {
    fn default() -> Self {
        Self {
            work_minutes: WORK_MINUTES_BOUNDS,
            break_minutes: BREAK_MINUTES_BOUNDS,
            rounds: ROUNDS_BOUNDS,
        }
    }
}

/// Current settings and whether they can be edited right now
#[derive(Debug, Clone, Serialize)]
pub struct SettingsResponse {
    pub settings: TimerSettings,
    pub editable: bool,
    pub bounds: SettingsBounds,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
