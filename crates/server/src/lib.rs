pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod router;
pub mod seed;
pub mod state;

use std::net::SocketAddr;

pub use config::Config;
pub use db::create_pool;
pub use router::create_router;
pub use state::AppState;

/// Build the pool, optionally seed reference data, and serve the API.
pub async fn run_server(
    addr: SocketAddr,
    config: Config,
    seed_data: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pool = create_pool(&config).await?;

    if seed_data {
        seed::seed(&pool).await?;
    }

    let state = AppState::new(pool, config);
    let app = create_router(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
