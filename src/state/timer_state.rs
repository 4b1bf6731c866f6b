//! Pomodoro timer state machine
//!
//! The engine is a plain value: it never sleeps or spawns, and time only moves
//! forward when [`PomodoroTimer::tick`] is called by a scheduler.

use serde::{Deserialize, Serialize};

use super::timer_config::{TimerConfiguration, TimerMode};
use crate::{error::TimerError, utils::format_time};

/// Live countdown state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub mode: TimerMode,
    pub remaining_seconds: u64,
    pub current_round: u32,
    pub running: bool,
}

impl TimerState {
    /// Initial state for a configuration: first Work interval, paused
    pub fn initial(configuration: &TimerConfiguration) -> Self {
        Self {
            mode: TimerMode::Work,
            remaining_seconds: configuration.work_duration_seconds(),
            current_round: 1,
            running: false,
        }
    }
}

/// What a single tick did to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer is paused, nothing changed
    Idle,
    /// One second was counted down
    Counted,
    /// A Work interval ended and a Break began for the given round
    BreakStarted { round: u32 },
    /// A Break ended and the next Work interval began
    WorkStarted { round: u32 },
    /// The last Work interval ended and the timer stopped
    Finished { rounds: u32 },
}

/// Serializable view of the timer for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub mode: TimerMode,
    pub remaining_seconds: u64,
    pub current_round: u32,
    pub total_rounds: u32,
    pub running: bool,
    pub total_seconds: u64,
    pub progress_ratio: f64,
    pub progress_percentage: u8,
    pub formatted_remaining: String,
}

/// Work/break countdown engine
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    configuration: TimerConfiguration,
    state: TimerState,
}

impl PomodoroTimer {
    /// Create a paused timer at the start of its first Work interval
    pub fn new(configuration: TimerConfiguration) -> Self {
        Self {
            configuration,
            state: TimerState::initial(&configuration),
        }
    }

    /// Create a timer resumed from an existing state
    pub fn with_state(
        configuration: TimerConfiguration,
        state: TimerState,
    ) -> Result<Self, TimerError> {
        if state.current_round < 1 || state.current_round > configuration.total_rounds() {
            return Err(TimerError::InvalidStateTransition(format!(
                "round {} is outside 1..={}",
                state.current_round,
                configuration.total_rounds()
            )));
        }
        if state.remaining_seconds > configuration.duration_for(state.mode) {
            return Err(TimerError::InvalidStateTransition(format!(
                "{} seconds remaining exceeds the {} interval",
                state.remaining_seconds, state.mode
            )));
        }

        Ok(Self {
            configuration,
            state,
        })
    }

    pub fn configuration(&self) -> &TimerConfiguration {
        &self.configuration
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Replace the configuration and return to the initial state.
    ///
    /// Rejected while the countdown is running.
    pub fn configure(&mut self, configuration: TimerConfiguration) -> Result<(), TimerError> {
        if self.state.running {
            return Err(TimerError::InvalidStateTransition(
                "cannot reconfigure a running timer, pause it first".to_string(),
            ));
        }

        self.configuration = configuration;
        self.state = TimerState::initial(&self.configuration);
        Ok(())
    }

    /// Resume the countdown. Returns false if it was already running.
    pub fn start(&mut self) -> bool {
        if self.state.running {
            return false;
        }
        self.state.running = true;
        true
    }

    /// Freeze the countdown. Returns false if it was already paused.
    pub fn pause(&mut self) -> bool {
        if !self.state.running {
            return false;
        }
        self.state.running = false;
        true
    }

    /// Restore the initial state for the current configuration
    pub fn reset(&mut self) -> bool {
        self.state = TimerState::initial(&self.configuration);
        true
    }

    /// Advance the countdown by one second.
    ///
    /// Reaching zero switches modes within the same tick.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.running {
            return TickOutcome::Idle;
        }

        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
            if self.state.remaining_seconds > 0 {
                return TickOutcome::Counted;
            }
        }

        self.switch_mode()
    }

    fn switch_mode(&mut self) -> TickOutcome {
        match self.state.mode {
            TimerMode::Work => {
                if self.state.current_round >= self.configuration.total_rounds() {
                    self.state.running = false;
                    return TickOutcome::Finished {
                        rounds: self.state.current_round,
                    };
                }
                self.state.current_round += 1;
                self.state.mode = TimerMode::Break;
                self.state.remaining_seconds = self.configuration.break_duration_seconds();
                TickOutcome::BreakStarted {
                    round: self.state.current_round,
                }
            }
            TimerMode::Break => {
                self.state.mode = TimerMode::Work;
                self.state.remaining_seconds = self.configuration.work_duration_seconds();
                TickOutcome::WorkStarted {
                    round: self.state.current_round,
                }
            }
        }
    }

    pub fn total_seconds_for_current_mode(&self) -> u64 {
        self.configuration.duration_for(self.state.mode)
    }

    /// Remaining time as a fraction of the current interval, in [0, 1]
    pub fn progress_ratio(&self) -> f64 {
        let total = self.total_seconds_for_current_mode();
        if total == 0 {
            return 0.0;
        }
        (self.state.remaining_seconds as f64 / total as f64).clamp(0.0, 1.0)
    }

    pub fn progress_percentage(&self) -> u8 {
        (self.progress_ratio() * 100.0).round() as u8
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.state.mode,
            remaining_seconds: self.state.remaining_seconds,
            current_round: self.state.current_round,
            total_rounds: self.configuration.total_rounds(),
            running: self.state.running,
            total_seconds: self.total_seconds_for_current_mode(),
            progress_ratio: self.progress_ratio(),
            progress_percentage: self.progress_percentage(),
            formatted_remaining: format_time(self.state.remaining_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(work: u64, brk: u64, rounds: u32) -> TimerConfiguration {
        TimerConfiguration::new(work, brk, rounds).unwrap()
    }

    fn timer_at(
        configuration: TimerConfiguration,
        mode: TimerMode,
        remaining_seconds: u64,
        current_round: u32,
    ) -> PomodoroTimer {
        PomodoroTimer::with_state(
            configuration,
            TimerState {
                mode,
                remaining_seconds,
                current_round,
                running: true,
            },
        )
        .unwrap()
    }

    #[test]
    fn new_timer_starts_paused_in_first_work_interval() {
        let timer = PomodoroTimer::new(config(1500, 300, 4));
        assert_eq!(
            *timer.state(),
            TimerState {
                mode: TimerMode::Work,
                remaining_seconds: 1500,
                current_round: 1,
                running: false,
            }
        );
    }

    #[test]
    fn tick_counts_down_by_one_second() {
        let mut timer = timer_at(config(600, 300, 3), TimerMode::Work, 120, 2);
        let before = *timer.state();

        assert_eq!(timer.tick(), TickOutcome::Counted);
        assert_eq!(
            *timer.state(),
            TimerState {
                remaining_seconds: 119,
                ..before
            }
        );
    }

    #[test]
    fn expired_work_interval_starts_break_and_next_round() {
        let mut timer = timer_at(config(600, 300, 3), TimerMode::Work, 0, 1);

        assert_eq!(timer.tick(), TickOutcome::BreakStarted { round: 2 });
        assert_eq!(
            *timer.state(),
            TimerState {
                mode: TimerMode::Break,
                remaining_seconds: 300,
                current_round: 2,
                running: true,
            }
        );
    }

    #[test]
    fn expired_break_starts_work_in_same_round() {
        let mut timer = timer_at(config(600, 300, 3), TimerMode::Break, 0, 2);

        assert_eq!(timer.tick(), TickOutcome::WorkStarted { round: 2 });
        assert_eq!(timer.state().mode, TimerMode::Work);
        assert_eq!(timer.state().remaining_seconds, 600);
        assert_eq!(timer.state().current_round, 2);
        assert!(timer.is_running());
    }

    #[test]
    fn final_work_interval_stops_the_timer() {
        let mut timer = timer_at(config(600, 300, 3), TimerMode::Work, 0, 3);

        assert_eq!(timer.tick(), TickOutcome::Finished { rounds: 3 });
        assert_eq!(
            *timer.state(),
            TimerState {
                mode: TimerMode::Work,
                remaining_seconds: 0,
                current_round: 3,
                running: false,
            }
        );
    }

    #[test]
    fn pause_is_idempotent_and_freezes_ticks() {
        let mut timer = timer_at(config(600, 300, 3), TimerMode::Break, 42, 2);

        assert!(timer.pause());
        let paused = *timer.state();
        assert!(!timer.pause());
        assert_eq!(*timer.state(), paused);

        for _ in 0..10 {
            assert_eq!(timer.tick(), TickOutcome::Idle);
        }
        assert_eq!(*timer.state(), paused);
    }

    #[test]
    fn start_resumes_where_it_paused() {
        let mut timer = timer_at(config(600, 300, 3), TimerMode::Work, 400, 1);
        timer.pause();

        assert!(timer.start());
        assert!(!timer.start());
        assert_eq!(timer.state().remaining_seconds, 400);
        assert_eq!(timer.state().mode, TimerMode::Work);
        assert_eq!(timer.state().current_round, 1);
    }

    #[test]
    fn reset_restores_initial_state_from_any_state() {
        let configuration = config(600, 300, 3);
        let expected = TimerState::initial(&configuration);

        let mut mid_break = timer_at(configuration, TimerMode::Break, 17, 3);
        mid_break.reset();
        assert_eq!(*mid_break.state(), expected);

        let mut finished = timer_at(configuration, TimerMode::Work, 0, 3);
        finished.tick();
        finished.reset();
        assert_eq!(*finished.state(), expected);

        let mut fresh = PomodoroTimer::new(configuration);
        fresh.reset();
        assert_eq!(*fresh.state(), expected);
    }

    #[test]
    fn configure_while_paused_resets_with_new_durations() {
        let mut timer = timer_at(config(600, 300, 3), TimerMode::Break, 10, 2);
        timer.pause();

        timer.configure(config(1200, 60, 5)).unwrap();
        assert_eq!(timer.configuration().total_rounds(), 5);
        assert_eq!(
            *timer.state(),
            TimerState {
                mode: TimerMode::Work,
                remaining_seconds: 1200,
                current_round: 1,
                running: false,
            }
        );
    }

    #[test]
    fn configure_while_running_is_rejected() {
        let mut timer = timer_at(config(600, 300, 3), TimerMode::Work, 100, 1);
        let before = *timer.state();

        let err = timer.configure(config(60, 60, 1)).unwrap_err();
        assert!(matches!(err, TimerError::InvalidStateTransition(_)));
        assert_eq!(*timer.state(), before);
        assert_eq!(timer.configuration().work_duration_seconds(), 600);
    }

    #[test]
    fn short_configuration_runs_to_completion() {
        let mut timer = PomodoroTimer::new(config(1, 1, 2));
        timer.start();

        assert_eq!(timer.tick(), TickOutcome::BreakStarted { round: 2 });
        assert_eq!(timer.state().mode, TimerMode::Break);
        assert_eq!(timer.state().current_round, 2);

        assert_eq!(timer.tick(), TickOutcome::WorkStarted { round: 2 });
        assert_eq!(timer.state().mode, TimerMode::Work);
        assert_eq!(timer.state().current_round, 2);

        assert_eq!(timer.tick(), TickOutcome::Finished { rounds: 2 });
        assert_eq!(
            *timer.state(),
            TimerState {
                mode: TimerMode::Work,
                remaining_seconds: 0,
                current_round: 2,
                running: false,
            }
        );
    }

    #[test]
    fn round_and_progress_stay_in_bounds_over_a_full_run() {
        let mut timer = PomodoroTimer::new(config(5, 3, 4));
        timer.start();

        let mut ticks = 0;
        while timer.is_running() {
            timer.tick();
            ticks += 1;
            let state = timer.state();
            assert!(state.current_round >= 1);
            assert!(state.current_round <= timer.configuration().total_rounds());
            let ratio = timer.progress_ratio();
            assert!((0.0..=1.0).contains(&ratio), "ratio {} out of range", ratio);
            assert!(ticks < 1000, "timer never stopped");
        }

        // 4 work intervals and 3 breaks
        assert_eq!(ticks, 4 * 5 + 3 * 3);
        assert_eq!(timer.state().current_round, 4);
    }

    #[test]
    fn finished_timer_stops_again_when_restarted() {
        let mut timer = timer_at(config(600, 300, 1), TimerMode::Work, 1, 1);
        assert_eq!(timer.tick(), TickOutcome::Finished { rounds: 1 });

        timer.start();
        assert_eq!(timer.tick(), TickOutcome::Finished { rounds: 1 });
        assert_eq!(timer.state().current_round, 1);
        assert!(!timer.is_running());
    }

    #[test]
    fn with_state_rejects_out_of_range_round() {
        let state = TimerState {
            mode: TimerMode::Work,
            remaining_seconds: 10,
            current_round: 4,
            running: false,
        };
        assert!(PomodoroTimer::with_state(config(600, 300, 3), state).is_err());
        assert!(PomodoroTimer::with_state(
            config(600, 300, 3),
            TimerState {
                current_round: 0,
                ..state
            }
        )
        .is_err());
    }

    #[test]
    fn snapshot_reports_derived_values() {
        let timer = timer_at(config(3600, 300, 3), TimerMode::Break, 150, 2);
        let snapshot = timer.snapshot();

        assert_eq!(snapshot.mode, TimerMode::Break);
        assert_eq!(snapshot.total_seconds, 300);
        assert_eq!(snapshot.total_rounds, 3);
        assert_eq!(snapshot.progress_ratio, 0.5);
        assert_eq!(snapshot.progress_percentage, 50);
        assert_eq!(snapshot.formatted_remaining, "02:30");

        let full = PomodoroTimer::new(config(3600, 300, 3)).snapshot();
        assert_eq!(full.progress_ratio, 1.0);
        assert_eq!(full.formatted_remaining, "1:00:00");
    }
}
