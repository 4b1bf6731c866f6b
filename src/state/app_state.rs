//! Main application state management

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{PomodoroTimer, TickOutcome, TimerConfiguration, TimerSettings, TimerSnapshot};
use crate::error::AppError;

/// Shared application state owning the single timer instance
#[derive(Debug)]
pub struct AppState {
    /// The timer engine; every mutation goes through this lock
    timer: Arc<Mutex<PomodoroTimer>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last command tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel publishing a snapshot whenever the timer changes
    pub timer_update_tx: watch::Sender<TimerSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _timer_update_rx: watch::Receiver<TimerSnapshot>,
}

impl AppState {
    /// Create a new AppState with a paused timer for the given configuration
    pub fn new(port: u16, host: String, configuration: TimerConfiguration) -> Self {
        let timer = PomodoroTimer::new(configuration);
        let (timer_update_tx, timer_update_rx) = watch::channel(timer.snapshot());

        Self {
            timer: Arc::new(Mutex::new(timer)),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
        }
    }

    fn lock_timer(&self) -> Result<MutexGuard<'_, PomodoroTimer>, AppError> {
        self.timer.lock().map_err(|_| AppError::LockPoisoned("timer"))
    }

    /// Apply a user command to the timer and notify watchers
    fn apply_command<F>(&self, action: &str, command: F) -> Result<TimerSnapshot, AppError>
    where
        F: FnOnce(&mut PomodoroTimer) -> Result<bool, AppError>,
    {
        let mut timer = self.lock_timer()?;
        let changed = command(&mut *timer)?;
        let snapshot = timer.snapshot();

        // Published under the lock so a racing tick cannot overwrite it
        if changed {
            self.publish(snapshot.clone());
        } else {
            debug!("Command {} left the timer unchanged", action);
        }
        drop(timer);

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        Ok(snapshot)
    }

    fn publish(&self, snapshot: TimerSnapshot) {
        if let Err(e) = self.timer_update_tx.send(snapshot) {
            warn!("Failed to send timer update: {}", e);
        }
    }

    /// Start or resume the countdown
    pub fn start(&self) -> Result<TimerSnapshot, AppError> {
        info!("Starting timer");
        self.apply_command("start", |timer| Ok(timer.start()))
    }

    /// Pause the countdown
    pub fn pause(&self) -> Result<TimerSnapshot, AppError> {
        info!("Pausing timer");
        self.apply_command("pause", |timer| Ok(timer.pause()))
    }

    /// Reset to the first Work interval
    pub fn reset(&self) -> Result<TimerSnapshot, AppError> {
        info!("Resetting timer");
        self.apply_command("reset", |timer| Ok(timer.reset()))
    }

    /// Apply new settings; only allowed while the timer is paused
    pub fn configure(&self, settings: TimerSettings) -> Result<TimerSnapshot, AppError> {
        info!(
            "Reconfiguring timer: work={}min, break={}min, rounds={}",
            settings.work_minutes, settings.break_minutes, settings.rounds
        );
        self.apply_command("configure", |timer| {
            let configuration = settings.to_configuration()?;
            timer.configure(configuration)?;
            Ok(true)
        })
    }

    /// Advance the timer by one tick and notify watchers if anything moved
    pub fn tick(&self) -> Result<TickOutcome, AppError> {
        let mut timer = self.lock_timer()?;
        let outcome = timer.tick();
        if outcome != TickOutcome::Idle {
            self.publish(timer.snapshot());
        }
        Ok(outcome)
    }

    /// Get current timer snapshot
    pub fn snapshot(&self) -> Result<TimerSnapshot, AppError> {
        Ok(self.lock_timer()?.snapshot())
    }

    /// Get current settings in minutes and whether they can be edited now
    pub fn settings(&self) -> Result<(TimerSettings, bool), AppError> {
        let timer = self.lock_timer()?;
        let settings = TimerSettings::from_configuration(timer.configuration());
        Ok((settings, !timer.is_running()))
    }

    /// Subscribe to snapshot updates
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.timer_update_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last command information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
