//! Contact form TUI
//!
//! A Ratatui front end that fills in the contact form and sends it through
//! the validation and submission pipeline.

use anyhow::Result;
use contact_form::app::App;
use contact_form::config::AppConfig;
use contact_form::form::ContactForm;
use contact_form::pipeline::ContactPipeline;
use contact_form::submit::{SimulatedSubmitter, Submitter};
use contact_form::ui::{self, TerminalDisplay};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_form=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut app = build_app()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Wire the pipeline to its collaborators from the user config
fn build_app() -> Result<App> {
    let config = AppConfig::load()?;

    let submitter: Arc<dyn Submitter> = if config.simulate_failure.unwrap_or(false) {
        Arc::new(SimulatedSubmitter::failing(config.simulated_latency()))
    } else {
        Arc::new(SimulatedSubmitter::new(config.simulated_latency()))
    };

    let display = Arc::new(TerminalDisplay::default());
    let pipeline = ContactPipeline::new(config.resolve(), ContactForm::standard(), submitter)?
        .with_display(display.clone());

    Ok(App::new(pipeline, display))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Pick up a finished submission before drawing
        app.tick().await;

        // Draw the UI
        let size = terminal.size()?;
        app.set_viewport_height(size.height.saturating_sub(ui::STATUS_BAR_HEIGHT));
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while a submission is in flight
        let poll_duration = if app.pipeline.is_submitting() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Poll without blocking the runtime so timers and the submission task run
        let ready = tokio::task::block_in_place(|| event::poll(poll_duration))?;
        if ready {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key);
                }
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
