pub mod popup;
pub mod stamp_grid;
