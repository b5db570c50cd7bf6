use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use trails::{config::ServerConfig, run_server};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = ServerConfig::from_env();
    tracing::debug!("Loaded configuration: {config:?}");

    run_server(config).await
}
