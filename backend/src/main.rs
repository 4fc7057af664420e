use backend::{dispatcher::Dispatcher, server};

use anyhow::Context;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let host = std::env::var("XIANGQI_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("XIANGQI_PORT").unwrap_or_else(|_| "3001".to_string());
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .context("invalid XIANGQI_HOST/XIANGQI_PORT")?;

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    tokio::spawn(Dispatcher::new(events_tx.clone()).run(events_rx));

    let app = server::router(events_tx);
    tracing::info!("listening on {addr}");
    let listener = TcpListener::bind(addr).await.context("failed to bind")?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
