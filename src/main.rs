use cinematch::api::{create_router, AppState};
use cinematch::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cinematch=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // Service clients are built once here and shared for the process lifetime
    let state = AppState::new(&config);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "CineMatch server running");
    axum::serve(listener, app).await?;

    Ok(())
}
