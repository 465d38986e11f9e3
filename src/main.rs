mod config;
mod error;
mod fraction;
mod interest;
mod models;
mod routes;
mod steps;
mod trigonometry;
mod utils;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    utils::init_tracing();

    let cfg = ServerConfig::from_env()?;

    // Router: calculator API + static form pages
    let app = routes::app(&cfg.static_dir);

    let listener = tokio::net::TcpListener::bind(cfg.addr).await?;
    tracing::info!("listening on {} (pages from {})", cfg.addr, cfg.static_dir.display());

    axum::serve(listener, app).await?;
    Ok(())
}
