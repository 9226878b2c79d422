use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use profreview::api::http::HttpReviewApi;
use profreview::banner::print_banner;
use profreview::config::ClientConfig;
use profreview::consts::DEFAULT_BASE_URL;
use profreview::display::{ProgressBar, render_outcome};
use profreview::orchestrator::Orchestrator;
use profreview::prompt::{Input, parse_input};
use profreview::state::SubmissionState;

#[derive(Parser)]
#[command(
    name = "profreview",
    version,
    about = "Professor reviews, summarized."
)]
struct Cli {
    /// Professor to look up (omit for interactive mode)
    name: Option<String>,

    /// Base URL of the review backend
    #[arg(short = 'u', long, env = "PROFREVIEW_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Progress tick interval in milliseconds
    #[arg(long, default_value_t = 1250, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Delay before the finished progress bar is hidden, in milliseconds
    #[arg(long, default_value_t = 500)]
    hide_delay_ms: u64,

    /// Per-request HTTP timeout in seconds
    #[arg(short, long, default_value_t = 120)]
    timeout: u64,

    /// Print the summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Debug logging on stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            tick_interval: Duration::from_millis(self.tick_ms),
            hide_delay: Duration::from_millis(self.hide_delay_ms),
            request_timeout: Duration::from_secs(self.timeout),
            ..ClientConfig::default()
        }
        .with_base_url(&self.api_url)
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("profreview=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.client_config();
    let api = Arc::new(HttpReviewApi::new(&config)?);
    let orchestrator = Orchestrator::new(api, config);

    // Single lookup mode
    if let Some(name) = &cli.name {
        let state = run_lookup(&orchestrator, name, cli.json).await;
        return Ok(match state {
            SubmissionState::Succeeded(_) => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        });
    }

    print_banner(orchestrator.config());

    // REPL: async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nprofreview> ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let name = match parse_input(&line) {
            Input::Empty => continue,
            Input::Quit => break,
            Input::Lookup(name) => name,
        };

        // Ctrl+C during a lookup abandons it, not the REPL
        tokio::select! {
            _ = run_lookup(&orchestrator, name, cli.json) => {}
            _ = tokio::signal::ctrl_c() => {
                eprint!("\x1b[2K\r");
                println!("\ninterrupted");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Submit one name with the progress bar shown, then print the outcome.
async fn run_lookup(orchestrator: &Orchestrator, name: &str, json: bool) -> SubmissionState {
    let bar = ProgressBar::start(orchestrator.subscribe());
    let state = orchestrator.submit(name).await;
    bar.stop().await;

    match (&state, render_outcome(&state, json)) {
        (SubmissionState::Failed(_), Some(text)) => eprintln!("{}", text),
        (_, Some(text)) => println!("{}", text),
        (_, None) => {}
    }
    state
}
