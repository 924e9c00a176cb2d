//! sumadora: keyboard-driven terminal calculator
//!
//! ## Usage
//!
//! ```bash
//! sumadora                        # default display policies
//! sumadora --error-clear-ms 500   # faster error recovery
//! sumadora --max-len 40           # narrower display
//! sumadora -vv 2>sumadora.log     # debug diagnostics on stderr
//! RUST_LOG=sumadora=debug sumadora 2>sumadora.log
//! ```

mod error;
mod input;
mod ui;

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use sumadora::prelude::{DisplayBuffer, DisplayOptions};
use tracing_subscriber::EnvFilter;

use crate::error::{TuiError, TuiResult};
use crate::input::{Action, InputHandler};

/// Poll timeout while no auto-clear deadline is armed
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Keyboard-driven terminal calculator
#[derive(Debug, Parser)]
#[command(name = "sumadora", version, about)]
struct Cli {
    /// Milliseconds an error display stays up before resetting to 0
    #[arg(long, default_value_t = DisplayOptions::DEFAULT_ERROR_CLEAR_DELAY.as_millis() as u64)]
    error_clear_ms: u64,

    /// Maximum number of characters kept in the display
    #[arg(long, default_value_t = DisplayOptions::DEFAULT_MAX_LEN)]
    max_len: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> TuiResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let options = build_options(&cli)?;
    run_terminal(options)
}

/// Diagnostics go to stderr so raw-mode stdout stays clean; redirect
/// with `2>sumadora.log` to capture them.
fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbose))),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

/// Fallback filter when `RUST_LOG` is unset
const fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build display policies from CLI args
fn build_options(cli: &Cli) -> TuiResult<DisplayOptions> {
    if cli.max_len == 0 {
        return Err(TuiError::invalid_argument("--max-len must be at least 1"));
    }
    Ok(DisplayOptions::new()
        .with_max_len(cli.max_len)
        .with_error_clear_delay(Duration::from_millis(cli.error_clear_ms)))
}

/// Raw mode plus alternate screen for the lifetime of the event loop
fn run_terminal(options: DisplayOptions) -> TuiResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = event_loop(&mut stdout, options);

    execute!(stdout, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result
}

fn event_loop(out: &mut impl Write, options: DisplayOptions) -> TuiResult<()> {
    let handler = InputHandler::new();
    let mut buffer = DisplayBuffer::with_options(options);

    loop {
        ui::draw(out, &buffer)?;

        let timeout = poll_timeout(buffer.auto_clear_deadline(), Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                match handler.handle_key(key_event) {
                    Action::Input(key) => buffer.handle_key(key),
                    Action::Quit => break,
                    Action::None => {}
                }
            }
        } else {
            // Timed out: the only pending work is the error auto-clear
            buffer.poll_auto_clear();
        }
    }

    Ok(())
}

/// Time to wait for the next event: until the pending auto-clear
/// deadline, or the idle interval when nothing is armed
fn poll_timeout(deadline: Option<Instant>, now: Instant) -> Duration {
    deadline.map_or(IDLE_POLL, |at| at.saturating_duration_since(now))
}
