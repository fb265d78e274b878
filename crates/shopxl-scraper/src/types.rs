//! Response types for a storefront's public `products.json` feed.
//!
//! ## Observed shape
//!
//! ### End of feed
//! Paging past the last product returns `{"products": []}`. Some hosts drop
//! the key entirely or send `null`; all three mean "no more data".
//!
//! ### Tags
//! An array of strings on current storefronts. Older themes serialized a
//! single comma-separated string, which is split here so both shapes flatten
//! the same way. Absent or `null` tags are an empty list.
//!
//! ### Images
//! Ordered gallery; only the first entry is ever read. May be `[]`, absent,
//! or `null` for products without media.
//!
//! ### Variant `price`
//! A decimal string such as `"30.00"` on most stores, a bare number on a
//! few. Kept as [`PriceValue`] so the original form survives into the export.
//!
//! ### Variant `available`
//! Boolean, missing on some older stores. Left as `None` when missing.

use serde::{Deserialize, Deserializer};
use shopxl_core::PriceValue;

/// Top-level response from `GET /products.json?limit=..&page=..`.
#[derive(Debug, Default, Deserialize)]
pub struct FeedPage {
    #[serde(default)]
    pub products: Option<Vec<FeedProduct>>,
}

impl FeedPage {
    /// Products on this page; empty when the key was absent or `null`.
    #[must_use]
    pub fn into_products(self) -> Vec<FeedProduct> {
        self.products.unwrap_or_default()
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedProduct {
    /// URL slug for the product page (e.g., `"classic-tee"`). Empty when
    /// the feed sent `null` or omitted it; the row is still exported.
    #[serde(default, deserialize_with = "null_as_default")]
    pub handle: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default)]
    pub vendor: Option<String>,

    #[serde(default)]
    pub product_type: Option<String>,

    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<FeedImage>,

    /// Purchasable options; each one becomes one exported row.
    #[serde(default, deserialize_with = "null_as_default")]
    pub variants: Vec<FeedVariant>,
}

/// A single purchasable variant of a [`FeedProduct`].
#[derive(Debug, Clone, Deserialize)]
pub struct FeedVariant {
    /// Display title, `"Default Title"` for single-variant products.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default)]
    pub price: Option<PriceValue>,

    #[serde(default)]
    pub sku: Option<String>,

    #[serde(default)]
    pub available: Option<bool>,
}

/// A product image.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedImage {
    /// Canonical CDN URL.
    #[serde(default)]
    pub src: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTags {
    List(Vec<String>),
    Joined(String),
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Option::<RawTags>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(RawTags::List(tags)) => tags,
        Some(RawTags::Joined(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect(),
    };
    Ok(tags)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
