use anyhow::Context;
use order_gateway::config::Config;
use order_gateway::lifecycle::{setup_tracing, Gateway};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = Config::from_env();
    info!(port = config.http_port, "Starting order gateway");

    let gateway = Gateway::new(&config)?;
    let listener = TcpListener::bind(("0.0.0.0", config.http_port))
        .await
        .with_context(|| format!("failed to bind port {}", config.http_port))?;

    gateway.serve(listener).await?;
    Ok(())
}
