//! Project-wide constants.

use std::time::Duration;

/// Default backend host.
pub const DEFAULT_BASE_URL: &str = "https://profratingsbackend.onrender.com";

pub const REVIEWS_PATH: &str = "/api/reviews";
pub const SUMMARY_PATH: &str = "/api/summary";

/// How often the simulated progress advances.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1250);

/// How long the finished (100%) bar stays up before the result replaces it.
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(500);

/// The backend scrapes with a headless browser, so lookups are slow.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub const NOT_FOUND_MESSAGE: &str = "No professor found";
pub const FETCH_FAILED_MESSAGE: &str = "An error occurred while fetching data.";
