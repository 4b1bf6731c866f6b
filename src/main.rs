//! Habitify Pomodoro - a work/break countdown engine served over HTTP
//!
//! This is the main entry point for the habitify-pomodoro application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use habitify_pomodoro::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::ticker_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("habitify_pomodoro={},tower_http=info", config.log_level()))
        .init();

    info!("Starting habitify-pomodoro server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, work={}min, break={}min, rounds={}",
          config.host, config.port, config.work_minutes, config.break_minutes, config.rounds);

    let timer_configuration = config.timer_configuration()?;

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), timer_configuration));

    // Start the ticker background task
    let ticker_state = Arc::clone(&state);
    let tick_period = config.tick_period();
    tokio::spawn(async move {
        ticker_task(ticker_state, tick_period).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /timer          - Current timer status");
    info!("  POST /timer/start    - Start or resume the countdown");
    info!("  POST /timer/pause    - Pause the countdown");
    info!("  POST /timer/reset    - Reset to the first work interval");
    info!("  GET  /timer/settings - Current settings and bounds");
    info!("  PUT  /timer/settings - Change settings while paused");
    info!("  GET  /timer/events   - Server-sent timer updates");
    info!("  GET  /health         - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
