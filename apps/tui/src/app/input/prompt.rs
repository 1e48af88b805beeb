use crate::api::CardSource;
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_prompt_input<S: CardSource>(app: &mut App<S>, key: KeyCode) {
    let Some(prompt) = app.prompt.as_mut() else {
        return;
    };

    match key {
        KeyCode::Esc => {
            app.prompt = None;
        }
        KeyCode::Enter => app.submit_prompt(),
        KeyCode::Backspace => {
            prompt.input.pop();
        }
        KeyCode::Char(ch) => prompt.input.push(ch),
        _ => {}
    }
}
