use std::sync::Arc;

use roster_service::api::{AppState, create_router};
use roster_service::config::ConfigLoader;
use roster_service::service::RosterService;
use roster_service::storage::InMemoryEmployeeRepository;
use tracing::{info, warn};

const CONFIG_DIR_ENV: &str = "ROSTER_CONFIG_DIR";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_service=info,audit=info".into()),
        )
        .init();

    let config_dir = std::env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| "./config".to_string());
    let config = ConfigLoader::load(&config_dir)?;
    info!(config_dir = %config_dir, "Configuration loaded");

    let repository = Arc::new(InMemoryEmployeeRepository::new());
    let service = RosterService::new(repository.clone());
    let seeded = service.seed(config.seed().to_vec())?;
    if repository.is_empty() {
        warn!("Starting with an empty roster");
    } else {
        info!(seeded, stored = repository.len(), "Seed employees stored");
    }

    let app = create_router(AppState::new(service));
    let listener = tokio::net::TcpListener::bind(&config.server().bind_address).await?;
    info!(address = %config.server().bind_address, "Roster service listening");

    axum::serve(listener, app).await?;
    Ok(())
}
