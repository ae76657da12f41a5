use std::path::PathBuf;

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum CatalogCommands {
    /// Load the catalog file and report validation errors
    Validate {
        #[arg(long, env = "STOREFRONT_CATALOG_PATH", default_value = "./config/catalog.yaml")]
        path: PathBuf,
    },
}

/// # Errors
///
/// Returns an error if the catalog cannot be read, parsed or validated.
pub(crate) fn run_catalog(command: CatalogCommands) -> anyhow::Result<()> {
    match command {
        CatalogCommands::Validate { path } => {
            let catalog = storefront_core::load_catalog(&path)?;
            let frontpage = catalog.frontpage().count();
            println!(
                "{}: {} products, {frontpage} on the frontpage",
                path.display(),
                catalog.products().len()
            );
            Ok(())
        }
    }
}
