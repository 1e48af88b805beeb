use crate::api::CardSource;
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_card_input<S: CardSource>(app: &mut App<S>, key: KeyCode) {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Char('g' | '/') => app.open_prompt(),
        KeyCode::Left | KeyCode::Char('p') => app.step(false),
        KeyCode::Right | KeyCode::Char('n') => app.step(true),
        _ => {}
    }
}
