use lastcall_server::config::AppConfig;
use lastcall_server::logging::init_logging;
use lastcall_server::maps::DirectionsBackend;
use lastcall_server::planner::PlannerConfig;
use lastcall_server::web::{AppState, create_router};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(false);

    let config = AppConfig::from_env()?;

    let directions = DirectionsBackend::from_settings(
        config.mock_dir.as_deref(),
        config.api_key.as_deref(),
        config.timeout_secs,
    )?;
    info!(
        backend = directions.kind(),
        origin = %config.origin,
        destinations = config.destinations.len(),
        "directions client ready"
    );

    let planner = PlannerConfig::default().with_locale(config.locale.clone());

    // Build app state
    let state = AppState::new(directions, planner, config.origin, config.destinations);

    // Create router
    let app = create_router(state, &config.static_dir);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Last Call listening on http://{}", config.bind);

    axum::serve(listener, app).await?;
    Ok(())
}
