use clap::Parser;
use dotenv::dotenv;
use ok_service::{config::Config, http};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ok_service=info,tower_http=info")),
        )
        .init();

    let config = Config::parse();

    let listener = http::bind(&config)?;

    // spin up API
    http::serve(listener).await?;

    Ok(())
}
