//! Storefront origin parsing.

use std::fmt;

use reqwest::Url;

use crate::error::ScraperError;

/// Scheme + host (+ explicit port) of a storefront, with path, query and
/// fragment discarded.
///
/// Given `"https://shop.example/collections/all?page=2"`, the origin is
/// `"https://shop.example"`, so the feed is always requested from the store
/// root regardless of which page the caller was looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    base: Url,
    host: String,
}

impl Origin {
    /// Parses any absolute `http`/`https` URL down to its origin.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidOrigin`] if `input` is not an absolute
    /// URL, uses another scheme, or has no host.
    pub fn parse(input: &str) -> Result<Self, ScraperError> {
        let invalid = |reason: String| ScraperError::InvalidOrigin {
            input: input.to_owned(),
            reason,
        };

        let url = Url::parse(input.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme \"{}\"", url.scheme())));
        }
        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| invalid("URL has no host".to_owned()))?
            .to_owned();

        let serialized = url.origin().ascii_serialization();
        let base = Url::parse(&serialized).map_err(|e| invalid(e.to_string()))?;

        Ok(Self { base, host })
    }

    /// Hostname without scheme or port, e.g. `"shop.example"`.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.host
    }

    /// `<origin>/products.json?limit=<limit>&page=<page>`.
    #[must_use]
    pub fn products_url(&self, limit: u32, page: u32) -> Url {
        let mut url = self.base.clone();
        url.set_path("/products.json");
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("page", &page.to_string());
        url
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base.as_str().trim_end_matches('/'))
    }
}
