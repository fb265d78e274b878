//! The sequential page loop that turns a whole feed into flat records.

use std::time::Duration;

use shopxl_core::FlatRecord;

use crate::error::ScraperError;
use crate::flatten::flatten_page;

use super::{CatalogClient, Origin};

impl CatalogClient {
    /// Fetches every page of the feed and flattens it into one record per
    /// variant.
    ///
    /// Pages are requested one at a time starting at 1. The first page whose
    /// `products` list is empty or absent ends the loop; no request is made
    /// past it. Records keep page, then product, then variant order.
    ///
    /// **All-or-nothing semantics**: on any page failure the records gathered
    /// from earlier pages are dropped and the error is returned.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_page`].
    pub async fn extract(&self, origin: &Origin) -> Result<Vec<FlatRecord>, ScraperError> {
        let mut records: Vec<FlatRecord> = Vec::new();
        let mut page: u32 = 1;

        loop {
            if page > 1 && self.inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.inter_request_delay_ms)).await;
            }

            let products = self.fetch_page(origin, page).await?.into_products();
            if products.is_empty() {
                tracing::debug!(origin = %origin, page, "empty page, end of feed");
                break;
            }

            records.extend(flatten_page(&products));
            tracing::info!(
                origin = %origin,
                page,
                products = products.len(),
                total_records = records.len(),
                "fetched page"
            );

            page += 1;
        }

        Ok(records)
    }

    /// Parses `shop_url` to its origin, then runs [`Self::extract`].
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidOrigin`] before any request if the URL
    /// cannot be parsed, otherwise anything [`Self::extract`] returns.
    pub async fn extract_url(
        &self,
        shop_url: &str,
    ) -> Result<(Origin, Vec<FlatRecord>), ScraperError> {
        let origin = Origin::parse(shop_url)?;
        let records = self.extract(&origin).await?;
        Ok((origin, records))
    }
}
