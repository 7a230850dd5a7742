use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use zoned_time_entries::config::AppConfig;
use zoned_time_entries::modules::time_entries::adapters::outbound::time_entries_in_memory::InMemoryTimeEntries;
use zoned_time_entries::shell::http::router;
use zoned_time_entries::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    // In-memory storage for now
    let repository = Arc::new(InMemoryTimeEntries::new());
    let app = router(AppState::new(repository, &config));

    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    tracing::info!(
        addr = %config.server_addr,
        week_start = ?config.calendar.week_start,
        week_end = ?config.calendar.week_end,
        boundary_format = ?config.boundary_format,
        "time entries API listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
