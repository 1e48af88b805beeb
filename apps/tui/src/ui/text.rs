use crate::ui::present::{CardScreen, Screen};
use std::fmt::Write;

const BAR_WIDTH: usize = 20;
const CELLS_PER_ROW: usize = 5;

/// Plain-text rendering used by headless mode.
pub fn render_text(screen: &Screen) -> String {
    match screen {
        Screen::Loading => "Loading...".to_string(),
        Screen::Error { message } => message.clone(),
        Screen::Loaded(card) => render_card(card),
    }
}

fn render_card(card: &CardScreen) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", card.period);
    let _ = writeln!(out, "{}", card.name);
    let _ = writeln!(out, "{}", card.card_no);
    out.push('\n');

    for row in card.cells.chunks(CELLS_PER_ROW) {
        let line = row
            .iter()
            .map(|cell| {
                let marker = if cell.filled { "[x]" } else { "[ ]" };
                format!("{marker} {:<9}", cell.label)
            })
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "{}", line.trim_end());
    }
    if !card.cells.is_empty() {
        out.push('\n');
    }

    let _ = writeln!(out, "[{}]", progress_bar(card.progress, BAR_WIDTH));
    out.push_str(&card.caption);
    out
}

fn progress_bar(ratio: f64, width: usize) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::view::ViewState;
    use crate::domain::{CardNo, Period, StampCardRecord};
    use crate::ui::present::present;

    fn screen(stamps: Vec<bool>) -> Screen {
        present(&ViewState::Loaded(StampCardRecord {
            no: CardNo::Text("12".to_string()),
            name: "Gym Visits".to_string(),
            period: Period {
                year: 2025,
                quarter: 1,
            },
            stamps,
        }))
    }

    #[test]
    fn renders_full_card() {
        let text = render_text(&screen(vec![true, true, false, false, false]));
        let expected = "\
Year 2025 - Quarter 1
Gym Visits
Card No: 12

[x] Stamp 1   [x] Stamp 2   [ ] Stamp 3   [ ] Stamp 4   [ ] Stamp 5

[########------------]
2 of 5 stamps collected (40.0%)";
        assert_eq!(text, expected);
    }

    #[test]
    fn wraps_grid_after_five_cells() {
        let text = render_text(&screen(vec![true; 7]));
        let grid = text
            .lines()
            .filter(|line| line.starts_with('['))
            .collect::<Vec<_>>();
        assert_eq!(grid.len(), 3);
        assert!(grid[1].ends_with("[x] Stamp 7"));
    }

    #[test]
    fn empty_card_has_no_grid() {
        let text = render_text(&screen(Vec::new()));
        assert!(!text.contains("Stamp 1"));
        assert!(text.contains("[--------------------]"));
        assert!(text.ends_with("0 of 0 stamps collected (0.0%)"));
    }

    #[test]
    fn error_is_shown_verbatim() {
        let text = render_text(&Screen::Error {
            message: "User not found".to_string(),
        });
        assert_eq!(text, "User not found");
    }
}
