pub mod client;
pub mod error;
pub mod flatten;
pub mod types;

pub use client::{CatalogClient, Origin, PAGE_SIZE};
pub use error::ScraperError;
pub use flatten::{flatten_page, flatten_product};
pub use types::{FeedImage, FeedPage, FeedProduct, FeedVariant};
