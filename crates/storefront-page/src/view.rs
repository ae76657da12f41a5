//! Serializable render model of a product page.

use serde::Serialize;

use storefront_core::{
    CatalogItemRef, ComponentBlock, Image, RecommendedProductSummary, RelativePricing, Topic,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPageView {
    pub name: String,
    pub path: String,
    pub summary: Option<ComponentBlock>,
    pub description: Option<ComponentBlock>,
    pub specs: Option<ComponentBlock>,
    pub topics: Vec<Topic>,
    /// Controls whether a variant selector is shown.
    pub has_variants: bool,
    pub variants: Vec<VariantOption>,
    pub selected_variant: SelectedVariantView,
    /// Platform-curated related products.
    pub related: Option<CollectionSection<CatalogItemRef>>,
    /// Fetched recommendations. Not deduplicated against `related`.
    pub recommended: Option<CollectionSection<RecommendedProductSummary>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantOption {
    pub sku: String,
    pub name: Option<String>,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedVariantView {
    pub sku: String,
    pub name: Option<String>,
    pub stock: Option<i64>,
    pub images: Vec<ImageView>,
    pub pricing: RelativePricing,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageView {
    pub url: String,
    pub alt: String,
    pub portrait: bool,
}

impl ImageView {
    /// Falls back to the product name when the image has no alt text.
    #[must_use]
    pub fn from_image(image: &Image, product_name: &str) -> Self {
        Self {
            url: image.url.clone(),
            alt: image
                .alt_text
                .clone()
                .unwrap_or_else(|| product_name.to_owned()),
            portrait: image.is_portrait(),
        }
    }
}

/// A titled list of items rendered as a collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSection<T> {
    /// Translation key of the section title, pluralised by `count`.
    pub title_key: &'static str,
    pub count: usize,
    pub items: Vec<T>,
}

impl<T> CollectionSection<T> {
    /// `None` for an empty list.
    #[must_use]
    pub fn non_empty(title_key: &'static str, items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            title_key,
            count: items.len(),
            items,
        })
    }
}
