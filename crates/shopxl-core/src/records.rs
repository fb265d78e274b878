use std::fmt;

use serde::{Deserialize, Serialize};

/// Spreadsheet header row, in the order every [`FlatRecord`] is written.
pub const FLAT_RECORD_COLUMNS: [&str; 10] = [
    "Handle",
    "Title",
    "Vendor",
    "Type",
    "Tags",
    "Image URL",
    "Variant Title",
    "Price",
    "SKU",
    "Available",
];

/// A variant price exactly as the storefront feed sent it.
///
/// Most stores send a decimal string (`"12.99"`), some send a bare JSON
/// number. Neither form is parsed or rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Text(String),
    Number(serde_json::Number),
}

impl PriceValue {
    /// Numeric value for a price the feed sent as a JSON number.
    ///
    /// Text prices return `None` so they are written back out as text.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PriceValue::Number(n) => n.as_f64(),
            PriceValue::Text(_) => None,
        }
    }
}

impl fmt::Display for PriceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceValue::Text(s) => f.write_str(s),
            PriceValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One output row: a single variant with its product's shared fields
/// carried down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatRecord {
    /// Product URL slug, e.g. `"classic-tee"`.
    pub handle: String,
    pub title: String,
    pub vendor: Option<String>,
    pub product_type: Option<String>,
    /// Product tags joined with `", "`.
    pub tags: String,
    /// Source URL of the product's first image, or `""` when it has none.
    pub image_url: String,
    pub variant_title: String,
    pub price: Option<PriceValue>,
    pub sku: Option<String>,
    /// `None` when the feed omitted the flag; never guessed.
    pub available: Option<bool>,
}
