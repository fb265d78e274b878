//! Flattening from feed products to one [`FlatRecord`] per variant.

use shopxl_core::FlatRecord;

use crate::types::FeedProduct;

/// Separator placed between tags in the exported `Tags` column.
const TAG_SEPARATOR: &str = ", ";

/// Flattens every product on a page, preserving product then variant order.
#[must_use]
pub fn flatten_page(products: &[FeedProduct]) -> Vec<FlatRecord> {
    let capacity = products.iter().map(|p| p.variants.len()).sum();
    let mut records = Vec::with_capacity(capacity);
    for product in products {
        records.extend(flatten_product(product));
    }
    records
}

/// Produces one record per variant of `product`, in feed order.
///
/// A product without variants yields nothing. Product-level fields are
/// shared by every record; only the first image is used.
#[must_use]
pub fn flatten_product(product: &FeedProduct) -> Vec<FlatRecord> {
    let image_url = featured_image_url(product);
    let tags = product.tags.join(TAG_SEPARATOR);

    product
        .variants
        .iter()
        .map(|variant| FlatRecord {
            handle: product.handle.clone(),
            title: product.title.clone(),
            vendor: product.vendor.clone(),
            product_type: product.product_type.clone(),
            tags: tags.clone(),
            image_url: image_url.clone(),
            variant_title: variant.title.clone(),
            price: variant.price.clone(),
            sku: variant.sku.clone(),
            available: variant.available,
        })
        .collect()
}

/// Source URL of the first image, or an empty string.
fn featured_image_url(product: &FeedProduct) -> String {
    product
        .images
        .first()
        .and_then(|image| image.src.clone())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "flatten_test.rs"]
mod tests;
