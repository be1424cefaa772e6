use anyhow::Result;
use calc_service::{server, Config};
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "calc_service=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    let listener = TcpListener::bind(config.socket_addr()?).await?;

    server::serve(listener, server::shutdown_signal()).await
}
