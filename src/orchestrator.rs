use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::api::ReviewApi;
use crate::config::ClientConfig;
use crate::error::LookupError;
use crate::progress::{self, COMPLETE, Ticker};
use crate::state::SubmissionState;
use crate::summary::Summary;

/// Runs one lookup at a time: reviews first, then the summary, with a
/// simulated progress bar published alongside.
///
/// Overlapping [`submit`](Orchestrator::submit) calls are not prevented.
/// They share the published state and whichever finishes last wins.
pub struct Orchestrator {
    api: Arc<dyn ReviewApi>,
    config: ClientConfig,
    state: Arc<watch::Sender<SubmissionState>>,
}

impl Orchestrator {
    pub fn new(api: Arc<dyn ReviewApi>, config: ClientConfig) -> Self {
        let (tx, _) = watch::channel(SubmissionState::Idle);
        Self {
            api,
            config,
            state: Arc::new(tx),
        }
    }

    /// Watch every state change, progress ticks included.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// The most recently published state.
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Look up `query` and publish progress until a result is ready.
    ///
    /// Progress always ends at exactly 100, then after the configured hide
    /// delay the final `Succeeded` or `Failed` state is published and
    /// returned. The query is sent as given, even when empty.
    pub async fn submit(&self, query: &str) -> SubmissionState {
        info!(query, "lookup started");
        self.state
            .send_replace(SubmissionState::InFlight { progress: 0 });

        let ticker = {
            let state = Arc::clone(&self.state);
            Ticker::start(self.config.tick_interval, move || {
                state.send_if_modified(|s| match s {
                    SubmissionState::InFlight { progress: p } => {
                        let next = progress::advance(*p);
                        let changed = next != *p;
                        *p = next;
                        changed
                    }
                    _ => false,
                });
            })
        };

        let outcome = self.lookup(query).await;

        ticker.stop().await;
        self.state
            .send_replace(SubmissionState::InFlight { progress: COMPLETE });

        let done = match outcome {
            Ok(summary) => {
                info!(query, "lookup succeeded");
                SubmissionState::Succeeded(summary)
            }
            Err(err) => {
                match &err {
                    LookupError::NotFound { .. } => info!(query, "{err}"),
                    LookupError::RequestFailed(_) => error!(query, "{err}"),
                }
                SubmissionState::Failed(err.user_message().to_string())
            }
        };

        tokio::time::sleep(self.config.hide_delay).await;
        self.state.send_replace(done.clone());
        done
    }

    /// The request chain without any progress reporting.
    ///
    /// The summary is only requested when at least one review came back.
    pub async fn lookup(&self, query: &str) -> Result<Summary, LookupError> {
        let reviews = self
            .api
            .fetch_reviews(query)
            .await
            .map_err(LookupError::RequestFailed)?;
        debug!(count = reviews.len(), "reviews fetched");

        if reviews.is_empty() {
            return Err(LookupError::NotFound {
                query: query.to_string(),
            });
        }

        self.api
            .summarize(&reviews)
            .await
            .map_err(LookupError::RequestFailed)
    }
}
