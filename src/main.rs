use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use showcase::config::Config;
use showcase::content::{Collection, ContentClient, ListingEntry};
use showcase::listing::listing_loader;
use showcase::logging::{self, LogTarget};

#[derive(Parser, Debug)]
#[command(name = "showcase", version, about = "Landing content loader and terminal preview")]
struct Cli {
    #[arg(long, global = true, help = "Config file (defaults to the platform config dir)")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch one collection and print it.
    List {
        #[arg(value_enum)]
        collection: Collection,
        #[arg(long, help = "Show at most N records")]
        limit: Option<usize>,
    },
    /// Interactive preview of the listings and the testimonial carousel.
    Preview,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    match cli.command {
        Commands::List { collection, limit } => {
            logging::init(
                &config.logging,
                LogTarget::resolve(&config.logging, LogTarget::Stderr),
            )?;
            list(&config, collection, limit).await
        }
        Commands::Preview => {
            logging::init(
                &config.logging,
                LogTarget::resolve(&config.logging, LogTarget::File(logging::default_log_file())),
            )?;
            let client = ContentClient::new(&config.content)?;
            showcase::ui::run(client, &config).await
        }
    }
}

async fn list(config: &Config, collection: Collection, limit: Option<usize>) -> anyhow::Result<()> {
    let client = ContentClient::new(&config.content)?;
    let limits = match limit {
        Some(limit) => config.listings.clone().with_limit(collection, limit),
        None => config.listings.clone(),
    };
    let loader = listing_loader(client, collection, limits);
    loader.refresh().await;

    let result = loader.snapshot();
    if let Some(error) = result.error {
        bail!(error);
    }
    if result.items.is_empty() {
        println!("Nothing published yet");
        return Ok(());
    }
    for entry in &result.items {
        println!("{}", format_entry(entry));
    }
    Ok(())
}

fn format_entry(entry: &ListingEntry) -> String {
    let mut line = entry.title.clone();
    if let Some(meta) = &entry.meta {
        line.push_str(&format!("  [{meta}]"));
    }
    if let Some(subtitle) = &entry.subtitle {
        line.push_str(&format!("  {subtitle}"));
    }
    line
}
