//! Commands that talk to the prediction API.

use std::sync::Arc;

use anyhow::Context;
use storefront_core::AppConfig;
use storefront_page::{ChannelTracker, MountedPage, PredictionSource, ProductPage, VisitorTracker};
use storefront_recommend::{RecommendClient, RecommendationAdapter};

/// Prints the mapped summaries, or the raw upstream body with `raw`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-JSON upstream body.
pub(crate) async fn run_recommend(
    config: &AppConfig,
    sku: &str,
    visitor_id: &str,
    raw: bool,
) -> anyhow::Result<()> {
    let client = RecommendClient::from_config(config)?;
    let prediction = client.predict(sku, visitor_id).await?;

    if raw {
        println!("{}", serde_json::to_string_pretty(&prediction.body)?);
        return Ok(());
    }

    let adapter = RecommendationAdapter::new(&config.recommend_canonical_host);
    let Some(summaries) = adapter.summaries(&prediction.body) else {
        anyhow::bail!(
            "prediction response (status {}) has no results; rerun with --raw to inspect it",
            prediction.status
        );
    };

    let mut count = 0usize;
    for summary in summaries {
        count += 1;
        println!(
            "{:<24}{:<48}{} {}",
            summary.id, summary.path, summary.price.price, summary.price.currency
        );
    }
    if count == 0 {
        println!("no recommendations for {sku}");
    }
    Ok(())
}

/// Composes a product page from the configured catalog and prints the view.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the product or variant
/// is unknown, or the view cannot be serialized.
pub(crate) async fn run_page(
    config: &AppConfig,
    path: &str,
    visitor_id: Option<String>,
    variant: Option<&str>,
) -> anyhow::Result<()> {
    let catalog = storefront_core::load_catalog(&config.catalog_path)?;
    let product = catalog
        .product(path)
        .cloned()
        .with_context(|| format!("product not found: {path}"))?;
    let page = ProductPage::new(product, config.locale.clone())?;

    let source = Arc::new(PredictionSource::new(
        RecommendClient::from_config(config)?,
        RecommendationAdapter::new(&config.recommend_canonical_host),
    ));

    let tracker = visitor_id.map_or_else(ChannelTracker::new, ChannelTracker::loaded);
    let ready = tracker.visitor_id().is_some();
    let mut mounted = MountedPage::mount(page, tracker, source);
    if ready {
        mounted.settled().await;
    }
    if let Some(sku) = variant {
        mounted.select_variant(sku).await?;
    }

    println!("{}", serde_json::to_string_pretty(&mounted.view().await)?);
    Ok(())
}
