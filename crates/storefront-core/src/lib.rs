pub mod app_config;
pub mod basket;
pub mod catalog;
pub mod components;
pub mod config;
pub mod pricing;
pub mod recommendations;

pub use app_config::{AppConfig, Environment};
pub use basket::{AmountCell, BasketState, Shipping, TotalsRow, TotalsRowKind};
pub use catalog::{
    load_catalog, Catalog, CatalogFile, Image, ImageSize, PriceVariant, Product, Topic, Variant,
};
pub use components::{CatalogItemRef, ComponentBlock, ComponentContent, ComponentKind};
pub use config::{load_app_config, load_app_config_from_env};
pub use pricing::{relative_price_variants, Locale, RelativePricing};
pub use recommendations::{RecommendedProductSummary, SummaryPrice};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[from] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}
