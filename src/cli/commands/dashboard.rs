//! Interactive dashboard command
//!
//! Owns the composition root: builds the Gemini client from explicit
//! configuration, sets up the terminal, and runs the event loop. Analysis
//! calls run as spawned tasks; their settlements come back over a channel
//! tagged with the sequence token that decides whether they still apply.

use anyhow::Result;
use clap::Args;
use futures::FutureExt;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::resolve_keywords;
use crate::config::GeminiConfig;
use crate::data_paths::DataPaths;
use crate::gemini::GeminiClient;
use crate::logging::{init_logging, LogMode, LoggingConfig};
use crate::tui::app::AnalysisOutcome;
use crate::tui::{events, ui, App, EventHandler};

#[derive(Args, Clone)]
pub struct DashboardArgs {
    /// Keywords to analyze (comma-separated, default: seed list)
    #[arg(long, value_delimiter = ',')]
    pub keywords: Vec<String>,
}

pub struct DashboardCommand {
    args: DashboardArgs,
}

impl DashboardCommand {
    pub fn new(args: DashboardArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, data_paths: DataPaths) -> Result<()> {
        // The TUI owns the terminal, so logs go to file only
        let logging_config = LoggingConfig::new(LogMode::FileOnly, data_paths.clone());
        init_logging(logging_config)?;

        let config = GeminiConfig::from_env()?;
        let client = Arc::new(GeminiClient::new(config));
        let keywords = Arc::new(resolve_keywords(&self.args.keywords));

        // Set up panic hook for proper terminal cleanup
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        let result = std::panic::AssertUnwindSafe(run_dashboard(client, keywords))
            .catch_unwind()
            .await;

        let _ = std::panic::take_hook();

        match result {
            Ok(res) => res,
            Err(panic) => {
                let panic_msg = if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else {
                    "Unknown panic occurred".to_string()
                };
                Err(anyhow::anyhow!("Dashboard panicked: {}", panic_msg))
            }
        }
    }
}

/// Issue a refresh: flip the app into loading and settle the analysis on
/// the outcome channel with the refresh's sequence token.
fn spawn_analysis(
    app: &mut App,
    client: Arc<GeminiClient>,
    keywords: Arc<Vec<String>>,
    tx: mpsc::UnboundedSender<AnalysisOutcome>,
) {
    let seq = app.begin_refresh();
    tokio::spawn(async move {
        let outcome = client.analyze(&keywords).await;
        // Receiver gone means the dashboard already exited
        let _ = tx.send((seq, outcome));
    });
}

async fn run_dashboard(client: Arc<GeminiClient>, keywords: Arc<Vec<String>>) -> Result<()> {
    let mut terminal = setup_terminal()?;

    let mut app = App::new();
    let mut event_handler = EventHandler::new(Duration::from_millis(100));
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<AnalysisOutcome>();

    // Auto-fetch on mount
    spawn_analysis(&mut app, client.clone(), keywords.clone(), outcome_tx.clone());

    info!("Starting dashboard main loop");

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &app)) {
            error!("Terminal drawing error: {}", e);
            break Err(anyhow::anyhow!("Terminal drawing failed: {}", e));
        }

        tokio::select! {
            ui_event_opt = event_handler.next() => {
                match ui_event_opt {
                    Some(events::Event::Quit) => {
                        info!("User requested quit");
                        app.should_quit = true;
                    }
                    Some(events::Event::Refresh) => {
                        spawn_analysis(
                            &mut app,
                            client.clone(),
                            keywords.clone(),
                            outcome_tx.clone(),
                        );
                    }
                    Some(events::Event::SelectPrevious) => app.select_previous(),
                    Some(events::Event::SelectNext) => app.select_next(),
                    Some(events::Event::Tick) => {
                        // Regular tick for UI updates
                    }
                    Some(events::Event::Error(error_msg)) => {
                        error!("Event handler error: {}", error_msg);
                    }
                    None => {
                        break Err(anyhow::anyhow!("Input event handler stopped unexpectedly"));
                    }
                }
            }
            outcome = outcome_rx.recv() => {
                if let Some(outcome) = outcome {
                    app.apply_outcome(outcome);
                }
            }
        }

        if app.should_quit {
            break Ok(());
        }
    };

    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    use std::io::IsTerminal;

    if !io::stdout().is_terminal() {
        return Err(anyhow::anyhow!("stdout is not a terminal"));
    }

    enable_raw_mode().map_err(|e| anyhow::anyhow!("Failed to enable raw mode: {}", e))?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| anyhow::anyhow!("Failed to setup terminal screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
