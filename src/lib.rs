//! Habitify Pomodoro - a work/break countdown engine served over HTTP
//!
//! This library provides the timer state machine, the background ticker that
//! drives it, and the HTTP surface a presentation layer uses to control it.

pub mod config;
pub mod error;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, TimerError};
pub use state::{AppState, PomodoroTimer, TimerConfiguration};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
