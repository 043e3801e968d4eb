use anyhow::Context;
use dotenvy::dotenv;
use edusync::config::server::ServerConfig;
use edusync::db::init_app_state;
use edusync::logging::init_tracing;
use edusync::router::init_router;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let server_config = ServerConfig::from_env();
    let state = init_app_state()
        .await
        .context("Failed to initialize application state")?;
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", server_config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", server_config.port))?;

    info!(port = server_config.port, "Server running on http://localhost:{}", server_config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
