pub mod http;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;

use crate::summary::{Review, Summary};

/// The remote review service. Could be the hosted backend or a test script.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// Fetch every review for the named professor. An empty list means the
    /// professor was not found; only transport or decoding problems are errors.
    async fn fetch_reviews(&self, name: &str) -> Result<Vec<Review>>;

    /// Ask the backend to digest a non-empty review set.
    async fn summarize(&self, reviews: &[Review]) -> Result<Summary>;
}
