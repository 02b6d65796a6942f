use axum::{extract::Request, ServiceExt};
use tracing_subscriber::EnvFilter;

use holocron::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), holocron::server::error::Error> {
    let db = startup::connect_to_database(&config).await?;

    let app = router::app(AppState::from(db));

    let listener = tokio::net::TcpListener::bind((config.host, config.port)).await?;

    tracing::info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
