//! HTTP endpoint handlers

use std::{convert::Infallible, sync::Arc};
use axum::{
    extract::State,
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
};
use futures::stream::{Stream, StreamExt};
use tokio_stream::wrappers::WatchStream;
use tracing::{info, warn};

use crate::{
    error::AppError,
    state::{AppState, TimerSettings},
};
use super::responses::{
    CommandResponse, HealthResponse, SettingsBounds, SettingsResponse, StatusResponse,
};

/// Handle POST /timer/start - Start or resume the countdown
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CommandResponse>, AppError> {
    let timer = state.start()?;
    info!("Start endpoint called - timer running");
    Ok(Json(CommandResponse::new("Timer started".to_string(), timer)))
}

/// Handle POST /timer/pause - Freeze the countdown
pub async fn pause_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CommandResponse>, AppError> {
    let timer = state.pause()?;
    info!("Pause endpoint called - timer paused");
    Ok(Json(CommandResponse::new("Timer paused".to_string(), timer)))
}

/// Handle POST /timer/reset - Return to the first Work interval
pub async fn reset_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CommandResponse>, AppError> {
    let timer = state.reset()?;
    info!("Reset endpoint called - timer reset");
    Ok(Json(CommandResponse::new("Timer reset".to_string(), timer)))
}

/// Handle GET /timer - Return current timer status
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, AppError> {
    let timer = state.snapshot()?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /timer/settings - Return current settings and their bounds
pub async fn get_settings_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SettingsResponse>, AppError> {
    let (settings, editable) = state.settings()?;

    Ok(Json(SettingsResponse {
        settings,
        editable,
        bounds: SettingsBounds::default(),
    }))
}

/// Handle PUT /timer/settings - Reconfigure a paused timer
pub async fn put_settings_handler(
    State(state): State<Arc<AppState>>,
    Json(settings): Json<TimerSettings>,
) -> Result<Json<CommandResponse>, AppError> {
    let timer = state.configure(settings)?;
    info!("Settings endpoint called - timer reconfigured");
    Ok(Json(CommandResponse::new("Timer reconfigured".to_string(), timer)))
}

/// Handle GET /timer/events - Stream a snapshot on every change
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!("Event stream opened");
    let stream = WatchStream::new(state.subscribe()).filter_map(|snapshot| async move {
        match Event::default().event("timer").json_data(&snapshot) {
            Ok(event) => Some(Ok::<_, Infallible>(event)),
            Err(e) => {
                warn!("Failed to encode timer event: {}", e);
                None
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
