// UI module for stamp-card-tui
// Maps the card view state to a Screen and draws it

pub mod present;
pub mod screens;
pub mod text;
pub mod widgets;

use crate::api::CardSource;
use crate::app::App;
use present::{present, Screen};
use ratatui::layout::{Constraint, Direction, Layout, Margin};
use ratatui::Frame;
use tachyonfx::EffectRenderer;

pub fn ui<S: CardSource>(app: &App<S>, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Card area
            Constraint::Length(2), // Status line
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    let screen = present(app.view.state());
    screens::card::render_screen(&screen, &app.throbber_state, f, layout[0]);

    if matches!(screen, Screen::Loaded(_)) {
        if let Ok(mut slot) = app.card_fx.lock() {
            if let Some(effect) = slot.as_mut() {
                let area = screens::card::card_area(layout[0]);
                f.buffer_mut().render_effect(effect, area, app.last_tick);
                if effect.done() {
                    *slot = None;
                }
            }
        }
    }

    screens::status::render_status(app, f, layout[1]);

    if let Some(prompt) = &app.prompt {
        screens::prompt::render_prompt(prompt, f, layout[0]);
    }

    if app.show_help {
        let area = f.area();
        screens::help::render_help(f, area);
    }
}
