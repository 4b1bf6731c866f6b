//! State management module
//!
//! This module contains the timer engine, its configuration and the shared
//! application state that wraps it.

pub mod app_state;
pub mod settings;
pub mod timer_config;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use settings::TimerSettings;
pub use timer_config::{TimerConfiguration, TimerMode};
pub use timer_state::{PomodoroTimer, TickOutcome, TimerSnapshot, TimerState};
