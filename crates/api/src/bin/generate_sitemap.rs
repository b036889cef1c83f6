use anyhow::Context;
use clap::Parser;
use recipe_site_api::config::AppConfig;
use recipe_site_api::prebuild::{self, SitemapArgs};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = SitemapArgs::parse();

    let config = AppConfig::from_env().context("Failed to load config")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    prebuild::run(args, &config).await?;
    Ok(())
}
