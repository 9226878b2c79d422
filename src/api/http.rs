use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::summary::{Review, ReviewsRequest, ReviewsResponse, Summary, SummaryRequest};

use super::ReviewApi;

/// Talks to the review backend over HTTP.
pub struct HttpReviewApi {
    client: reqwest::Client,
    reviews_url: String,
    summary_url: String,
}

impl HttpReviewApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            reviews_url: config.reviews_url(),
            summary_url: config.summary_url(),
        })
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<serde_json::Value> {
        let resp = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .with_context(|| format!("POST {url} failed"))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            bail!("backend error ({}) from {}: {}", status, url, text);
        }

        resp.json()
            .await
            .with_context(|| format!("invalid JSON from {url}"))
    }
}

#[async_trait]
impl ReviewApi for HttpReviewApi {
    async fn fetch_reviews(&self, name: &str) -> Result<Vec<Review>> {
        let value = self
            .post_json(&self.reviews_url, &ReviewsRequest { name })
            .await?;
        debug!(response = %value, "reviews response");

        let resp: ReviewsResponse =
            serde_json::from_value(value).context("malformed reviews response")?;
        if let Some(hint) = &resp.error {
            debug!(%hint, "backend reported a lookup problem");
        }
        Ok(resp.reviews)
    }

    async fn summarize(&self, reviews: &[Review]) -> Result<Summary> {
        let value = self
            .post_json(&self.summary_url, &SummaryRequest { reviews })
            .await?;
        debug!(response = %value, "summary response");

        Summary::from_json(value)
    }
}
