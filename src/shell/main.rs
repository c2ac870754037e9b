use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use event_hub::shell::config::Config;
use event_hub::shell::http::router;
use event_hub::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    if config.api_token.is_none() {
        tracing::warn!("no API token configured, every request will be rejected");
    }

    let app = router(AppState::from_config(&config));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("EventHub API: http://{}/v1", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
