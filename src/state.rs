use crate::summary::Summary;

/// Where a lookup stands. One value replaces the separate loading /
/// progress / result / error flags, so an error and a summary can never
/// be shown together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Requests are pending, or the bar is showing 100 just before the result.
    InFlight { progress: u8 },
    Succeeded(Summary),
    /// Carries the user-facing message.
    Failed(String),
}

impl SubmissionState {
    /// True while the progress bar should be visible.
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::InFlight { .. })
    }

    pub fn progress(&self) -> Option<u8> {
        match self {
            SubmissionState::InFlight { progress } => Some(*progress),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<&Summary> {
        match self {
            SubmissionState::Succeeded(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
