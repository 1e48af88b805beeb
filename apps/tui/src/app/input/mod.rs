mod card;
mod prompt;

use crate::api::CardSource;
use crate::app::state::App;
use crossterm::event::KeyCode;

/// Routes a key press: F1 always toggles help, an open help popup swallows
/// everything but Esc, and the go-to prompt takes input while it is open.
pub fn handle_input<S: CardSource>(app: &mut App<S>, key: KeyCode) {
    match (app.show_help, key) {
        (_, KeyCode::F(1)) => app.show_help = !app.show_help,
        (true, KeyCode::Esc) => app.show_help = false,
        (true, _) => {}
        (false, _) if app.prompt.is_some() => prompt::handle_prompt_input(app, key),
        (false, _) => card::handle_card_input(app, key),
    }
}
