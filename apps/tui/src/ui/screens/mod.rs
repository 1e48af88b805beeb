pub mod card;
pub mod help;
pub mod prompt;
pub mod status;
