use anyhow::Context;
use ingest_drain::config::Settings;
use ingest_drain::pipeline::DrainLoop;
use ingest_drain::queue::RedisQueue;
use ingest_drain::sink::MongoSink;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // .with_max_level(tracing::Level::DEBUG)
        .with_max_level(tracing::Level::INFO)
        .init();

    // A missing .env file is fine; the variables may come from the real environment.
    match dotenvy::dotenv() {
        Ok(path) => tracing::info!("Loaded environment from {}", path.display()),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!("Ignoring unreadable .env file: {}", err),
    }

    let settings = Settings::from_env().context("Invalid configuration")?;

    // 1. Connections:
    let sink = MongoSink::connect(&settings.mongo)
        .await
        .context("Could not connect to MongoDB")?;
    let queue = RedisQueue::connect(&settings.redis)
        .await
        .context("Could not connect to Redis")?;
    tracing::info!("Connected to MongoDB and Redis");

    // 2. Shutdown on Ctrl+C, between iterations:
    let ct = CancellationToken::new();
    let shutdown = ct.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
            return;
        }
        tracing::info!("Shutdown requested, finishing current item");
        shutdown.cancel();
    });

    // 3. Drain:
    let mut drain = DrainLoop::new(queue, sink, settings.queue_name, settings.drain);
    let stats = drain.run(ct).await?;

    match serde_json::to_string(&stats) {
        Ok(json) => tracing::info!("Final stats: {}", json),
        Err(_) => tracing::info!("Final stats: {:?}", stats),
    }

    // Handles are released here.
    drop(drain.into_parts());

    Ok(())
}
