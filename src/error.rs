use thiserror::Error;

use crate::consts::{FETCH_FAILED_MESSAGE, NOT_FOUND_MESSAGE};

/// Why a lookup produced no summary.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The reviews endpoint answered with an empty list.
    #[error("no reviews found for {query:?}")]
    NotFound { query: String },

    /// Either request failed: transport, status, or decoding.
    #[error("request failed: {0:#}")]
    RequestFailed(#[source] anyhow::Error),
}

impl LookupError {
    /// The text shown to the user. The underlying cause is never included.
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::NotFound { .. } => NOT_FOUND_MESSAGE,
            LookupError::RequestFailed(_) => FETCH_FAILED_MESSAGE,
        }
    }
}
