use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roomfinder::api::router;
use roomfinder::config::AppConfig;
use roomfinder::repository::Snapshot;
use roomfinder::services::{RoomService, ScheduleViews, SystemClock};
use roomfinder::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "roomfinder=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;

    let snapshot = Snapshot::load(&config.rooms_path(), &config.schedules_path());
    let service = RoomService::new(Arc::new(snapshot), Arc::new(SystemClock));
    let state = AppState {
        views: Arc::new(ScheduleViews::new(Arc::new(service))),
    };

    let app = router(state);

    info!("listening on http://{}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
