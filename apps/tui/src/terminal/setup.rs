use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout, Write};

/// Enters raw mode and the alternate screen. On failure the terminal is
/// restored before the error is returned.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().wrap_err("failed to enable raw mode")?;

    let terminal = execute!(stdout(), EnterAlternateScreen, cursor::Hide)
        .wrap_err("failed to enter alternate screen")
        .and_then(|()| {
            Terminal::new(CrosstermBackend::new(stdout())).wrap_err("failed to create terminal")
        });

    if terminal.is_err() {
        cleanup_terminal_state(true, true);
    }
    terminal
}

/// Restores the terminal; every step is attempted even if an earlier one fails.
pub fn cleanup_terminal_state(raw_mode: bool, alternate_screen: bool) {
    let mut out = stdout();

    if alternate_screen {
        report("leave alternate screen", execute!(out, LeaveAlternateScreen));
    }
    if raw_mode {
        report("disable raw mode", disable_raw_mode());
    }
    report("show cursor", execute!(out, cursor::Show));
    report("flush", out.flush());
}

fn report(step: &str, result: std::io::Result<()>) {
    if let Err(e) = result {
        tracing::warn!(step, "terminal restore failed: {e}");
    }
}
