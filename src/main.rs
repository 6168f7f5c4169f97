use anyhow::Result;
use career_advisor::{config::Config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when not present)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("career_advisor=info".parse()?),
        )
        .init();

    server::install_panic_hook();

    let config = Config::from_env()?;

    info!(
        "Starting career advisor (model: {}, language: {})",
        config.openai_model,
        config.language.name()
    );

    server::serve(config).await
}
