//! Named content blocks attached to a catalog product.
//!
//! Blocks are classified into a [`ComponentKind`] once, while the catalog is
//! deserialized, so page composition can look them up by kind.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Summary,
    Description,
    Specs,
    RelatedProducts,
    Other,
}

impl ComponentKind {
    /// Classifies a component by its catalog id.
    #[must_use]
    pub fn classify(id: &str) -> Self {
        match id {
            "summary" => ComponentKind::Summary,
            "description" => ComponentKind::Description,
            "specs" => ComponentKind::Specs,
            "related-products" => ComponentKind::RelatedProducts,
            _ => ComponentKind::Other,
        }
    }
}

/// Reference to another catalog item, as listed by a related-products block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemRef {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub path: String,
    #[serde(rename = "type", default = "default_item_type")]
    pub item_type: String,
}

fn default_item_type() -> String {
    "product".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComponentContent {
    /// Related-products content. `items` is `None` when the block carries no
    /// usable item list.
    Related { items: Option<Vec<CatalogItemRef>> },
    /// Any other block: rich text, paragraphs, property tables. Passed through.
    Document(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawComponentBlock")]
pub struct ComponentBlock {
    pub id: String,
    pub name: Option<String>,
    pub kind: ComponentKind,
    pub content: ComponentContent,
}

impl ComponentBlock {
    /// Items of a related-products block; `None` for every other kind.
    #[must_use]
    pub fn related_items(&self) -> Option<&[CatalogItemRef]> {
        match &self.content {
            ComponentContent::Related { items } => items.as_deref(),
            ComponentContent::Document(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct RawComponentBlock {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    content: serde_json::Value,
}

impl From<RawComponentBlock> for ComponentBlock {
    fn from(raw: RawComponentBlock) -> Self {
        let kind = ComponentKind::classify(&raw.id);
        let content = match kind {
            ComponentKind::RelatedProducts => ComponentContent::Related {
                items: raw
                    .content
                    .get("items")
                    .cloned()
                    .and_then(|items| serde_json::from_value(items).ok()),
            },
            _ => ComponentContent::Document(raw.content),
        };

        Self {
            id: raw.id,
            name: raw.name,
            kind,
            content,
        }
    }
}
