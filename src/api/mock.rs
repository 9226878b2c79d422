use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::ReviewApi;
use crate::summary::{Review, Summary};

/// What a scripted call should do.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    Fail(String),
}

impl<T: Clone> Reply<T> {
    fn resolve(&self) -> Result<T> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Fail(msg) => Err(anyhow!("{msg}")),
        }
    }
}

/// A scripted review service for tests. Every call returns the same reply
/// after an optional delay, and calls are counted.
pub struct MockReviewApi {
    reviews: Reply<Vec<Review>>,
    summary: Reply<Summary>,
    latency: Duration,
    queries: Mutex<Vec<String>>,
    summarized: Mutex<Vec<Vec<Review>>>,
    review_calls: AtomicUsize,
    summary_calls: AtomicUsize,
}

impl MockReviewApi {
    pub fn new(reviews: Reply<Vec<Review>>, summary: Reply<Summary>) -> Self {
        Self {
            reviews,
            summary,
            latency: Duration::ZERO,
            queries: Mutex::new(Vec::new()),
            summarized: Mutex::new(Vec::new()),
            review_calls: AtomicUsize::new(0),
            summary_calls: AtomicUsize::new(0),
        }
    }

    /// Sleep this long inside each call (pairs well with a paused clock).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn review_calls(&self) -> usize {
        self.review_calls.load(Ordering::SeqCst)
    }

    pub fn summary_calls(&self) -> usize {
        self.summary_calls.load(Ordering::SeqCst)
    }

    /// Names passed to `fetch_reviews`, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    /// Review sets passed to `summarize`, in call order.
    pub fn summarized(&self) -> Vec<Vec<Review>> {
        self.summarized.lock().unwrap().clone()
    }

    async fn wait(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl ReviewApi for MockReviewApi {
    async fn fetch_reviews(&self, name: &str) -> Result<Vec<Review>> {
        self.review_calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(name.to_string());
        self.wait().await;
        self.reviews.resolve()
    }

    async fn summarize(&self, reviews: &[Review]) -> Result<Summary> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        self.summarized.lock().unwrap().push(reviews.to_vec());
        self.wait().await;
        self.summary.resolve()
    }
}
