//! Terminal output: the live progress bar and the rendered summary.

use std::fmt::Write as _;
use std::io::Write;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::progress::COMPLETE;
use crate::state::SubmissionState;
use crate::summary::Summary;

/// Bar width in cells, not counting the brackets.
const BAR_WIDTH: usize = 30;

/// `[#########---------------------]  30%`
pub fn render_bar(progress: u8) -> String {
    let progress = progress.min(COMPLETE);
    let filled = BAR_WIDTH * usize::from(progress) / usize::from(COMPLETE);
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress
    )
}

/// Draws the progress bar on stderr for as long as a lookup is in flight.
///
/// The painter follows an orchestrator's state channel and clears its line
/// once the state leaves `InFlight`. Writing to stderr keeps stdout clean
/// for the summary.
pub struct ProgressBar {
    handle: JoinHandle<()>,
    cancel: watch::Sender<bool>,
}

impl ProgressBar {
    pub fn start(mut states: watch::Receiver<SubmissionState>) -> Self {
        let (cancel_tx, mut cancel_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut shown = false;
            loop {
                let progress = states.borrow_and_update().progress();
                match progress {
                    Some(p) => {
                        // \r moves to start of line, \x1b[2K clears the line
                        eprint!("\x1b[2K\r{}", render_bar(p));
                        let _ = std::io::stderr().flush();
                        shown = true;
                    }
                    None if shown => break,
                    None => {}
                }

                tokio::select! {
                    changed = states.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                    _ = cancel_rx.changed() => break,
                }
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self {
            handle,
            cancel: cancel_tx,
        }
    }

    /// Stop painting and clear the line.
    pub async fn stop(mut self) {
        let _ = self.cancel.send(true);
        let _ = (&mut self.handle).await;
    }
}

impl Drop for ProgressBar {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Plain-text rendering of a summary. Blank list entries are left out.
pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Summary");
    let _ = writeln!(out);
    let _ = writeln!(out, "Rating: {}", summary.overall_rating);
    let _ = writeln!(out);
    push_list(&mut out, "Pros", &summary.pros());
    push_list(&mut out, "Cons", &summary.cons());
    push_list(&mut out, "Specific Feedback", &summary.specific_feedback());
    push_list(&mut out, "Recommendations", &summary.recommendations());
    let _ = writeln!(out);
    let _ = writeln!(out, "Overall Summary: {}", summary.overall_summary.trim());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Alternative Professor: {}",
        summary.alternative_professor.trim()
    );
    out
}

fn push_list(out: &mut String, title: &str, items: &[&str]) {
    let _ = writeln!(out, "{title}:");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

/// What to print once a lookup has finished. `None` while still in flight.
pub fn render_outcome(state: &SubmissionState, json: bool) -> Option<String> {
    match state {
        SubmissionState::Succeeded(summary) if json => {
            Some(serde_json::to_string_pretty(&summary.shown()).unwrap_or_default())
        }
        SubmissionState::Succeeded(summary) => Some(render_summary(summary)),
        SubmissionState::Failed(message) => Some(message.clone()),
        SubmissionState::Idle | SubmissionState::InFlight { .. } => None,
    }
}
