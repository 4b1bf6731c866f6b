//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::{
    error::TimerError,
    state::timer_config::{
        TimerConfiguration, DEFAULT_BREAK_MINUTES, DEFAULT_ROUNDS, DEFAULT_WORK_MINUTES,
    },
};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "habitify-pomodoro")]
#[command(about = "Pomodoro timer engine with an HTTP presentation surface")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "5000")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Work interval length in minutes
    #[arg(short, long, default_value_t = DEFAULT_WORK_MINUTES)]
    pub work_minutes: u64,

    /// Break interval length in minutes
    #[arg(short, long, default_value_t = DEFAULT_BREAK_MINUTES)]
    pub break_minutes: u64,

    /// Number of work intervals before the timer stops
    #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
    pub rounds: u32,

    /// Ticker period in milliseconds
    #[arg(long, default_value = "1000")]
    pub tick_millis: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Build the initial timer configuration
    pub fn timer_configuration(&self) -> Result<TimerConfiguration, TimerError> {
        TimerConfiguration::from_minutes(self.work_minutes, self.break_minutes, self.rounds)
    }

    /// Ticker period, never shorter than one millisecond
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_settings() {
        let config = Config::try_parse_from(["habitify-pomodoro"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:5000");
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.tick_period(), Duration::from_secs(1));

        let timer = config.timer_configuration().unwrap();
        assert_eq!(timer, TimerConfiguration::default());
    }

    #[test]
    fn accepts_durations_outside_slider_bounds() {
        let config = Config::try_parse_from(["habitify-pomodoro", "-w", "1", "-b", "1", "-r", "9"])
            .unwrap();
        let timer = config.timer_configuration().unwrap();
        assert_eq!(timer.work_duration_seconds(), 60);
        assert_eq!(timer.total_rounds(), 9);
    }

    #[test]
    fn rejects_zero_rounds() {
        let config = Config::try_parse_from(["habitify-pomodoro", "--rounds", "0"]).unwrap();
        assert!(config.timer_configuration().is_err());
    }
}
