// Static site renderer
//
// Purpose: render every page of a site directory into an output directory
// Usage: cargo run --bin render_site -- --site-dir site --out-dir dist

use anyhow::Context;
use clap::Parser;
use portfolio_content::{site::default_out_dir, SiteConfig, SiteRenderer};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Site directory holding the HTML pages [env: SITE_DIR]
    #[arg(short, long)]
    site_dir: Option<PathBuf>,

    /// Output directory (default: <site-dir>-rendered)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Fetch content from this origin instead of the site directory [env: DATA_URL]
    #[arg(long)]
    data_url: Option<String>,

    /// JSON page registry [env: PAGES_CONFIG]
    #[arg(short, long)]
    pages_config: Option<PathBuf>,

    /// Delay before scrolling to an anchor, in milliseconds [env: SCROLL_SETTLE_MS]
    #[arg(long)]
    settle_ms: Option<u64>,
}

impl Cli {
    fn apply(self, mut config: SiteConfig) -> SiteConfig {
        if let Some(site_dir) = self.site_dir {
            config.site_dir = site_dir;
        }
        if let Some(data_url) = self.data_url {
            config.data_url = Some(data_url);
        }
        if let Some(pages_config) = self.pages_config {
            config.pages_config = Some(pages_config);
        }
        if let Some(ms) = self.settle_ms {
            config.settle_delay = Duration::from_millis(ms);
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "portfolio_content=info,tower_http=debug,axum=debug,warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let out_dir = cli.out_dir.clone();
    let config = cli.apply(SiteConfig::from_env().context("Invalid environment")?);
    let out_dir = out_dir.unwrap_or_else(|| default_out_dir(&config.site_dir));

    tracing::info!("Configuration:");
    tracing::info!("  SITE_DIR: {}", config.site_dir.display());
    tracing::info!("  OUT_DIR: {}", out_dir.display());
    tracing::info!("  DATA_URL: {}", config.data_url.as_deref().unwrap_or("(site directory)"));

    let renderer = SiteRenderer::from_config(&config).context("Failed to set up renderer")?;
    let summary = renderer.build(&config.site_dir, &out_dir).await?;

    println!(
        "Rendered {} pages ({} sections), copied {} files into {}",
        summary.pages,
        summary.sections_rendered,
        summary.copied,
        out_dir.display()
    );
    Ok(())
}
