mod catalog;
mod recommend;
mod totals;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::catalog::CatalogCommands;

#[derive(Debug, Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Storefront command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render basket totals rows from a basket state JSON file
    Totals {
        /// Path to a JSON file holding a basket state
        file: PathBuf,
    },
    /// Query the prediction API for one SKU
    Recommend {
        #[arg(long)]
        sku: String,
        #[arg(long)]
        visitor_id: String,
        /// Print the upstream body instead of the mapped summaries
        #[arg(long)]
        raw: bool,
    },
    /// Compose a product page and print its view as JSON
    Page {
        /// Product path, e.g. /shop/chairs/oak-lounge-chair
        path: String,
        /// Visitor id; without it recommendations are not fetched
        #[arg(long)]
        visitor_id: Option<String>,
        /// Variant to select after mount
        #[arg(long)]
        variant: Option<String>,
    },
    /// Catalog maintenance
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Totals { file } => totals::run_totals(&file),
        Commands::Recommend {
            sku,
            visitor_id,
            raw,
        } => {
            let config = storefront_core::load_app_config()?;
            recommend::run_recommend(&config, &sku, &visitor_id, raw).await
        }
        Commands::Page {
            path,
            visitor_id,
            variant,
        } => {
            let config = storefront_core::load_app_config()?;
            recommend::run_page(&config, &path, visitor_id, variant.as_deref()).await
        }
        Commands::Catalog { command } => catalog::run_catalog(command),
    }
}

#[cfg(test)]
mod tests;
