use portfolio_api::shell::config::AppConfig;
use portfolio_api::shell::http::{cors_layer, router};
use portfolio_api::shell::state::AppState;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(&config).await?;
    let app = router(state).layer(cors_layer(&config.server));

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr} (GraphQL at /gql)");
    axum::serve(listener, app).await?;
    Ok(())
}
