use anyhow::Context;
use clap::Parser;
use portfolio_site::utils::{logger, validation::Validate};
use portfolio_site::{publish_static, LocalStorage, PageRenderer, PortfolioContent, SiteConfig};

#[derive(Parser)]
#[command(name = "render-static")]
#[command(about = "Render the portfolio page to static files")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Output directory
    #[arg(short, long, default_value = "./dist")]
    output: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            SiteConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?
        }
        None => SiteConfig::default(),
    };
    config.validate().context("Configuration validation failed")?;

    let content = PortfolioContent::builtin().context("Built-in content is invalid")?;
    let renderer = PageRenderer::new(config, content);
    let assets = LocalStorage::new(".");
    let output = LocalStorage::new(&args.output);

    let written = publish_static(&renderer, &assets, &output)
        .await
        .map_err(|e| {
            anyhow::anyhow!("{} ({})", e.user_friendly_message(), e.recovery_suggestion())
        })?;

    tracing::info!("✅ Static page rendered: {}", written.join(", "));
    println!("📁 Output saved to: {}", output.base_path().display());
    Ok(())
}
