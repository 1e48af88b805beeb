use clap::Parser;
use color_eyre::Result;
use stamp_card_tui::api::HttpCardSource;
use stamp_card_tui::app::{App, CardView};
use stamp_card_tui::cli::CliArgs;
use stamp_card_tui::logging::{init_logging, LogTarget};
use stamp_card_tui::{config, event, terminal};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let headless = args.headless || !is_terminal();
    init_logging(
        &LogTarget::choose(headless, args.log_file.as_deref()),
        args.debug,
    )?;

    let config = config::init_app_config()?;
    tracing::debug!(api_url = %config.api_url, "configuration loaded");

    let source = HttpCardSource::new(&config)?;
    let view = CardView::new(Arc::new(source), config.detailed_errors);

    if headless {
        return event::run_headless(view, &args.location, args.json).await;
    }

    let mut app = App::new(view);
    app.navigate(&args.location);

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
