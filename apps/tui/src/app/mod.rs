// App module for stamp-card-tui
// Holds the card view model and the shell state around it

pub mod input;
pub mod state;
pub mod view;

pub use input::handle_input;
pub use state::{App, LocationPrompt};
pub use view::{CardView, ViewState};
