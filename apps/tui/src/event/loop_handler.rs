use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

use crate::api::CardSource;
use crate::app::{handle_input, App, CardView};
use crate::ui;
use crate::ui::present::{present, Screen};
use crate::ui::text::render_text;

/// What headless mode prints, and whether the card failed to load.
#[derive(Debug)]
pub struct HeadlessOutput {
    pub body: String,
    pub failed: bool,
}

/// Run the application in headless mode (no UI)
pub async fn run_headless<S: CardSource>(
    view: CardView<S>,
    location: &str,
    json: bool,
) -> Result<()> {
    let output = render_headless(view, location, json).await?;
    println!("{}", output.body);

    if output.failed {
        return Err(color_eyre::eyre::eyre!(
            "stamp card for {location} could not be loaded"
        ));
    }
    Ok(())
}

pub async fn render_headless<S: CardSource>(
    mut view: CardView<S>,
    location: &str,
    json: bool,
) -> Result<HeadlessOutput> {
    view.set_location(location.to_string());
    let screen = present(view.settle().await);
    let failed = matches!(screen, Screen::Error { .. });

    let body = if json {
        serde_json::to_string_pretty(&screen)?
    } else {
        render_text(&screen)
    };

    Ok(HeadlessOutput { body, failed })
}

/// Run the main application event loop
pub async fn run<S: CardSource>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        // Apply finished requests and advance animations
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if key.kind == KeyEventKind::Press {
                        handle_input(app, key.code);
                    }
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;
    use crate::domain::{CardNo, Period, StampCardRecord};
    use crate::location::CardId;
    use std::sync::Arc;

    struct FixedSource;

    impl CardSource for FixedSource {
        async fn fetch_card(&self, id: &CardId) -> Result<StampCardRecord, FetchError> {
            if id.as_str() != "42" {
                return Err(FetchError::status(reqwest::StatusCode::NOT_FOUND));
            }
            Ok(StampCardRecord {
                no: CardNo::Number(42.into()),
                name: "Ada Lovelace".to_string(),
                period: Period {
                    year: 2025,
                    quarter: 2,
                },
                stamps: vec![true, true, false, false, false],
            })
        }
    }

    fn view() -> CardView<FixedSource> {
        CardView::new(Arc::new(FixedSource), false)
    }

    #[tokio::test]
    async fn headless_prints_card_text() -> Result<()> {
        let output = render_headless(view(), "/42", false).await?;
        assert!(!output.failed);
        assert!(output.body.starts_with("Year 2025 - Quarter 2\nAda Lovelace\nCard No: 42"));
        assert!(output.body.ends_with("2 of 5 stamps collected (40.0%)"));
        Ok(())
    }

    #[tokio::test]
    async fn headless_json_carries_phase_and_caption() -> Result<()> {
        let output = render_headless(view(), "/42", true).await?;
        let json: serde_json::Value = serde_json::from_str(&output.body)?;
        assert_eq!(json["phase"], "loaded");
        assert_eq!(json["completed"], 2);
        assert_eq!(json["cells"][0]["label"], "Stamp 1");
        Ok(())
    }

    #[tokio::test]
    async fn headless_reports_failure() -> Result<()> {
        let output = render_headless(view(), "/7", false).await?;
        assert!(output.failed);
        assert_eq!(output.body, "User not found");
        Ok(())
    }
}
