//! Ticker background task driving the timer engine

use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::{AppState, TickOutcome};

/// Background task that advances the timer once per period.
///
/// Missed periods (for example after the host was suspended) are skipped, not
/// replayed, so lost wall-clock time is simply not counted.
pub async fn ticker_task(state: Arc<AppState>, period: Duration) {
    info!("Starting ticker task with a period of {:?}", period);

    let mut interval = interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;

        match state.tick() {
            Ok(TickOutcome::Idle) => {}
            Ok(TickOutcome::Counted) => {
                debug!("Timer tick counted");
            }
            Ok(TickOutcome::BreakStarted { round }) => {
                info!("Work interval complete, break started (round {} next)", round);
            }
            Ok(TickOutcome::WorkStarted { round }) => {
                info!("Break complete, work interval started for round {}", round);
            }
            Ok(TickOutcome::Finished { rounds }) => {
                info!("All {} rounds complete, timer stopped", rounds);
            }
            Err(e) => {
                error!("Failed to advance timer: {}", e);
            }
        }
    }
}
