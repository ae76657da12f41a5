//! Product page state: the selected variant and the recommendation request.

use storefront_core::{
    relative_price_variants, ComponentKind, Locale, Product, RecommendedProductSummary, Variant,
};

use crate::error::PageError;
use crate::view::{
    CollectionSection, ImageView, ProductPageView, SelectedVariantView, VariantOption,
};

pub const RELATED_TITLE_KEY: &str = "relatedProduct";
pub const RECOMMENDED_TITLE_KEY: &str = "recommendedProduct";

/// Lifecycle of a one-shot asynchronous request.
#[derive(Debug)]
pub enum RequestState<T, E = PageError> {
    Idle,
    Loading,
    Loaded(T),
    Failed(E),
}

impl<T, E> RequestState<T, E> {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    #[must_use]
    pub fn loaded(&self) -> Option<&T> {
        match self {
            RequestState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ProductPage {
    product: Product,
    locale: Locale,
    selected: usize,
    recommendations: RequestState<Vec<RecommendedProductSummary>>,
}

impl ProductPage {
    /// Mounts a page on the product's default variant.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::NoDefaultVariant`] if no variant is flagged as
    /// default. Catalog validation rules this out for loaded products.
    pub fn new(product: Product, locale: Locale) -> Result<Self, PageError> {
        let selected = product
            .variants
            .iter()
            .position(|v| v.is_default)
            .ok_or_else(|| PageError::NoDefaultVariant {
                path: product.path.clone(),
            })?;

        Ok(Self {
            product,
            locale,
            selected,
            recommendations: RequestState::Idle,
        })
    }

    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub fn selected_variant(&self) -> &Variant {
        &self.product.variants[self.selected]
    }

    /// Switches the selected variant. Never touches the recommendation
    /// request: a fetch already made for the previous variant stands.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::UnknownVariant`] if the product has no such SKU.
    pub fn select_variant(&mut self, sku: &str) -> Result<(), PageError> {
        let idx = self
            .product
            .variants
            .iter()
            .position(|v| v.sku == sku)
            .ok_or_else(|| PageError::UnknownVariant {
                path: self.product.path.clone(),
                sku: sku.to_owned(),
            })?;
        self.selected = idx;
        Ok(())
    }

    #[must_use]
    pub fn recommendations(&self) -> &RequestState<Vec<RecommendedProductSummary>> {
        &self.recommendations
    }

    /// Claims the single recommendation fetch of this page.
    ///
    /// Moves `Idle` to `Loading` and returns the SKU to fetch for. Returns
    /// `None` once the fetch has been claimed.
    pub fn begin_recommendations(&mut self) -> Option<String> {
        if !self.recommendations.is_idle() {
            return None;
        }
        self.recommendations = RequestState::Loading;
        Some(self.selected_variant().sku.clone())
    }

    /// Records the fetch outcome; the list replaces any previous state wholesale.
    pub fn finish_recommendations(
        &mut self,
        outcome: Result<Vec<RecommendedProductSummary>, PageError>,
    ) {
        self.recommendations = match outcome {
            Ok(products) => RequestState::Loaded(products),
            Err(e) => {
                tracing::warn!(
                    path = %self.product.path,
                    error = %e,
                    "recommendations unavailable"
                );
                RequestState::Failed(e)
            }
        };
    }

    /// Composes the render model from the current state.
    #[must_use]
    pub fn view(&self) -> ProductPageView {
        let product = &self.product;
        let variant = self.selected_variant();

        let related = product
            .related_products()
            .map(<[_]>::to_vec)
            .and_then(|items| CollectionSection::non_empty(RELATED_TITLE_KEY, items));

        let recommended = self
            .recommendations
            .loaded()
            .cloned()
            .and_then(|items| CollectionSection::non_empty(RECOMMENDED_TITLE_KEY, items));

        ProductPageView {
            name: product.name.clone(),
            path: product.path.clone(),
            summary: product.component(ComponentKind::Summary).cloned(),
            description: product.component(ComponentKind::Description).cloned(),
            specs: product.component(ComponentKind::Specs).cloned(),
            topics: product.topics.clone(),
            has_variants: product.has_variants(),
            variants: product
                .variants
                .iter()
                .map(|v| VariantOption {
                    sku: v.sku.clone(),
                    name: v.name.clone(),
                    selected: v.sku == variant.sku,
                })
                .collect(),
            selected_variant: SelectedVariantView {
                sku: variant.sku.clone(),
                name: variant.name.clone(),
                stock: variant.stock,
                images: variant
                    .images
                    .iter()
                    .map(|img| ImageView::from_image(img, &product.name))
                    .collect(),
                pricing: relative_price_variants(variant, &self.locale),
            },
            related,
            recommended,
        }
    }
}

#[cfg(test)]
#[path = "composer_test.rs"]
mod tests;
