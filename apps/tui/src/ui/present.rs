use crate::app::view::ViewState;
use crate::domain::StampCardRecord;
use serde::Serialize;

/// Everything a renderer needs to draw one frame of the card page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum Screen {
    Loading,
    Error { message: String },
    Loaded(CardScreen),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardScreen {
    pub period: String,
    pub name: String,
    pub card_no: String,
    pub cells: Vec<StampCell>,
    pub completed: usize,
    pub total: usize,
    /// Fill fraction of the progress bar, `0.0..=1.0`.
    pub progress: f64,
    pub progress_label: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StampCell {
    pub label: String,
    pub filled: bool,
}

pub fn present(state: &ViewState) -> Screen {
    match state {
        ViewState::Loading => Screen::Loading,
        ViewState::Error(message) => Screen::Error {
            message: message.clone(),
        },
        ViewState::Loaded(record) => Screen::Loaded(card_screen(record)),
    }
}

fn card_screen(record: &StampCardRecord) -> CardScreen {
    let completed = record.completed_stamps();
    let total = record.total_stamps();
    let progress = record.progress();

    let cells = record
        .stamps
        .iter()
        .enumerate()
        .map(|(index, filled)| StampCell {
            label: format!("Stamp {}", index + 1),
            filled: *filled,
        })
        .collect();

    CardScreen {
        period: record.period.label(),
        name: record.name.clone(),
        card_no: format!("Card No: {}", record.no),
        cells,
        completed,
        total,
        progress: progress.ratio(),
        progress_label: progress.label(),
        caption: format!(
            "{completed} of {total} stamps collected ({}%)",
            progress.label()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CardNo, Period};

    fn record(stamps: Vec<bool>) -> StampCardRecord {
        StampCardRecord {
            no: CardNo::Number(17.into()),
            name: "Bakery Regulars".to_string(),
            period: Period {
                year: 2024,
                quarter: 3,
            },
            stamps,
        }
    }

    fn loaded(stamps: Vec<bool>) -> CardScreen {
        match present(&ViewState::Loaded(record(stamps))) {
            Screen::Loaded(card) => card,
            other => panic!("expected a card, got {other:?}"),
        }
    }

    #[test]
    fn loading_and_error_show_nothing_else() {
        assert_eq!(present(&ViewState::Loading), Screen::Loading);
        assert_eq!(
            present(&ViewState::Error("User not found".to_string())),
            Screen::Error {
                message: "User not found".to_string()
            }
        );
    }

    #[test]
    fn card_header_and_caption() {
        let card = loaded(vec![true, true, false, false, false]);
        assert_eq!(card.period, "Year 2024 - Quarter 3");
        assert_eq!(card.name, "Bakery Regulars");
        assert_eq!(card.card_no, "Card No: 17");
        assert_eq!(card.completed, 2);
        assert_eq!(card.progress_label, "40.0");
        assert_eq!(card.caption, "2 of 5 stamps collected (40.0%)");
        assert!((card.progress - 0.4).abs() < 1e-9);
    }

    #[test]
    fn cells_follow_stamp_order() {
        let stamps = vec![false, true, false, true, true, false, false];
        let card = loaded(stamps.clone());

        assert_eq!(card.cells.len(), stamps.len());
        for (index, (cell, filled)) in card.cells.iter().zip(&stamps).enumerate() {
            assert_eq!(cell.filled, *filled);
            assert_eq!(cell.label, format!("Stamp {}", index + 1));
        }
    }

    #[test]
    fn sixteen_slot_caption_rounds_half_up() {
        let mut stamps = vec![false; 16];
        stamps[0] = true;
        let card = loaded(stamps);
        assert_eq!(card.caption, "1 of 16 stamps collected (6.3%)");
        assert_eq!(card.progress_label, "6.3");
    }

    #[test]
    fn empty_card_renders_zero_percent() {
        let card = loaded(Vec::new());
        assert!(card.cells.is_empty());
        assert_eq!(card.caption, "0 of 0 stamps collected (0.0%)");
        assert!(card.progress.abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_with_phase_tag() -> Result<(), serde_json::Error> {
        let json = serde_json::to_value(present(&ViewState::Loaded(record(vec![true]))))?;
        assert_eq!(json["phase"], "loaded");
        assert_eq!(json["caption"], "1 of 1 stamps collected (100.0%)");

        let error = serde_json::to_value(present(&ViewState::Error("boom".to_string())))?;
        assert_eq!(error["phase"], "error");
        assert_eq!(error["message"], "boom");
        Ok(())
    }
}
