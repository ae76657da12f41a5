//! File-backed product catalog.
//!
//! The catalog is loaded once from YAML and validated so every product has at
//! least one variant and exactly one default variant.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::components::{CatalogItemRef, ComponentBlock, ComponentKind};
use crate::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Storefront path, e.g. `"/shop/chairs/oak-chair"`.
    pub path: String,
    pub name: String,
    #[serde(default)]
    pub components: Vec<ComponentBlock>,
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl Product {
    #[must_use]
    pub fn default_variant(&self) -> Option<&Variant> {
        self.variants.iter().find(|v| v.is_default)
    }

    /// `true` when a variant selector is worth showing.
    #[must_use]
    pub fn has_variants(&self) -> bool {
        self.variants.len() > 1
    }

    /// First component of the given kind.
    #[must_use]
    pub fn component(&self, kind: ComponentKind) -> Option<&ComponentBlock> {
        self.components.iter().find(|c| c.kind == kind)
    }

    /// Platform-curated related items from the related-products block.
    #[must_use]
    pub fn related_products(&self) -> Option<&[CatalogItemRef]> {
        self.component(ComponentKind::RelatedProducts)
            .and_then(ComponentBlock::related_items)
    }

    #[must_use]
    pub fn item_ref(&self) -> CatalogItemRef {
        CatalogItemRef {
            id: self.default_variant().map(|v| v.sku.clone()),
            name: self.name.clone(),
            path: self.path.clone(),
            item_type: "product".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub sku: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub price_variants: Vec<PriceVariant>,
    /// Units in stock; `None` when stock is not tracked.
    #[serde(default)]
    pub stock: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceVariant {
    pub identifier: String,
    pub price: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    /// Pre-rendered sizes, largest first.
    #[serde(default)]
    pub variants: Vec<ImageSize>,
}

impl Image {
    /// Portrait when the first rendered size is taller than it is wide.
    #[must_use]
    pub fn is_portrait(&self) -> bool {
        self.variants
            .first()
            .is_some_and(|size| size.height > size.width)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSize {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub products: Vec<Product>,
    /// Product paths shown on the frontpage, in order.
    #[serde(default)]
    pub frontpage: Vec<String>,
}

/// Validated catalog indexed by product path.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_path: HashMap<String, usize>,
    frontpage: Vec<String>,
}

impl Catalog {
    /// Validates a parsed catalog file and builds the path index.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if any product or frontpage entry
    /// violates the catalog rules.
    pub fn from_file(file: CatalogFile) -> Result<Self, ConfigError> {
        validate_catalog(&file)?;

        let by_path = file
            .products
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.path.clone(), idx))
            .collect();

        Ok(Self {
            products: file.products,
            by_path,
            frontpage: file.frontpage,
        })
    }

    /// Parses and validates a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CatalogFileParse`] on malformed YAML and
    /// [`ConfigError::Validation`] on rule violations.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let file: CatalogFile = serde_yaml::from_str(content)?;
        Self::from_file(file)
    }

    #[must_use]
    pub fn product(&self, path: &str) -> Option<&Product> {
        self.by_path.get(path).map(|&idx| &self.products[idx])
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Frontpage products in configured order.
    pub fn frontpage(&self) -> impl Iterator<Item = &Product> + '_ {
        self.frontpage.iter().filter_map(|path| self.product(path))
    }
}

/// Load and validate the catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    Catalog::from_yaml_str(&content)
}

fn validate_catalog(file: &CatalogFile) -> Result<(), ConfigError> {
    let mut seen_paths = HashSet::new();

    for product in &file.products {
        if product.path.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' has an empty path",
                product.name
            )));
        }

        if product.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product at '{}' has an empty name",
                product.path
            )));
        }

        if !seen_paths.insert(product.path.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate product path: '{}'",
                product.path
            )));
        }

        if product.variants.is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' has no variants",
                product.path
            )));
        }

        let defaults = product.variants.iter().filter(|v| v.is_default).count();
        if defaults != 1 {
            return Err(ConfigError::Validation(format!(
                "product '{}' must have exactly one default variant, found {defaults}",
                product.path
            )));
        }
    }

    for path in &file.frontpage {
        if !seen_paths.contains(path.as_str()) {
            return Err(ConfigError::Validation(format!(
                "frontpage references unknown product path: '{path}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
