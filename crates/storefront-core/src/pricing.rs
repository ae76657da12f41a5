use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::catalog::Variant;

/// Locale-dependent storefront settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    pub locale: String,
    /// ISO 4217 currency code used when a price carries none.
    pub currency: String,
    /// Identifier of the regular price variant, e.g. `"default"`.
    pub default_price_variant: String,
    /// Identifier of the sale price variant, e.g. `"sales"`.
    pub discount_price_variant: Option<String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            currency: "USD".to_string(),
            default_price_variant: "default".to_string(),
            discount_price_variant: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativePricing {
    pub default_price: Option<Decimal>,
    pub discount_price: Option<Decimal>,
    pub discount_percentage: Option<Decimal>,
    pub currency: String,
}

/// Resolves the regular and sale price of a variant for a locale.
///
/// The regular price is the price variant named by the locale, falling back
/// to the first listed. A sale price is only reported when it is strictly
/// lower than the regular price.
#[must_use]
pub fn relative_price_variants(variant: &Variant, locale: &Locale) -> RelativePricing {
    let default = variant
        .price_variants
        .iter()
        .find(|pv| pv.identifier == locale.default_price_variant)
        .or_else(|| variant.price_variants.first());

    let currency = default
        .and_then(|pv| pv.currency.clone())
        .unwrap_or_else(|| locale.currency.clone());

    let default_price = default.map(|pv| pv.price);

    let discount_price = locale
        .discount_price_variant
        .as_deref()
        .and_then(|id| variant.price_variants.iter().find(|pv| pv.identifier == id))
        .map(|pv| pv.price)
        .filter(|discount| default_price.is_some_and(|regular| *discount < regular));

    let discount_percentage = match (default_price, discount_price) {
        (Some(regular), Some(discount)) if !regular.is_zero() => Some(
            ((regular - discount) / regular * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        ),
        _ => None,
    };

    RelativePricing {
        default_price,
        discount_price,
        discount_percentage,
        currency,
    }
}
