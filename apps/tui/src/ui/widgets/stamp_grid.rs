use crate::ui::present::StampCell;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

pub const CELLS_PER_ROW: usize = 5;

pub const FILLED_ICON: &str = "●";
pub const EMPTY_ICON: &str = "○";

/// How much room each cell gets. Cards with many slots drop to a denser
/// style before any cell is left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellStyle {
    /// Bordered box, icon above label.
    Boxed,
    /// Icon above label, no border.
    Compact,
    /// Icon and label on one line.
    Inline,
}

impl CellStyle {
    const fn height(self) -> u16 {
        match self {
            Self::Boxed => 4,
            Self::Compact => 2,
            Self::Inline => 1,
        }
    }

    /// Roomiest style whose rows all fit, falling back to `Inline`.
    fn fitting(rows: u16, available: u16) -> Self {
        [Self::Boxed, Self::Compact]
            .into_iter()
            .find(|style| rows.saturating_mul(style.height()) <= available)
            .unwrap_or(Self::Inline)
    }
}

/// Rows of stamp cells, five per row, in slot order.
pub struct StampGrid<'a> {
    cells: &'a [StampCell],
}

impl<'a> StampGrid<'a> {
    pub const fn new(cells: &'a [StampCell]) -> Self {
        Self { cells }
    }

    fn rows(cells: usize) -> u16 {
        u16::try_from(cells.div_ceil(CELLS_PER_ROW)).unwrap_or(u16::MAX)
    }

    /// Height the grid will occupy when at most `available` lines are free.
    pub fn fitted_height(cells: usize, available: u16) -> u16 {
        let rows = Self::rows(cells);
        rows.saturating_mul(CellStyle::fitting(rows, available).height())
            .min(available)
    }
}

impl Widget for StampGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || self.cells.is_empty() {
            return;
        }

        let rows: Vec<&[StampCell]> = self.cells.chunks(CELLS_PER_ROW).collect();
        let style = CellStyle::fitting(Self::rows(self.cells.len()), area.height);
        let fits = usize::from(area.height / style.height());

        // Keep the last line for a marker when some rows can't be shown.
        let shown = if rows.len() > fits {
            fits.saturating_sub(1)
        } else {
            rows.len()
        };

        let mut y = area.y;
        for row in &rows[..shown] {
            let row_area = Rect {
                x: area.x,
                y,
                width: area.width,
                height: style.height(),
            };
            #[allow(clippy::cast_possible_truncation)]
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, CELLS_PER_ROW as u32); CELLS_PER_ROW])
                .split(row_area);

            for (cell, cell_area) in row.iter().zip(columns.iter()) {
                render_cell(cell, style, *cell_area, buf);
            }
            y += style.height();
        }

        let hidden = self.cells.len() - (shown * CELLS_PER_ROW).min(self.cells.len());
        if hidden > 0 {
            let marker_area = Rect {
                x: area.x,
                y: area.bottom() - 1,
                width: area.width,
                height: 1,
            };
            Paragraph::new(Span::styled(
                format!("+{hidden} more stamps"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center)
            .render(marker_area, buf);
        }
    }
}

fn render_cell(cell: &StampCell, style: CellStyle, area: Rect, buf: &mut Buffer) {
    let (icon, icon_style, border_style) = if cell.filled {
        (
            FILLED_ICON,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Green),
        )
    } else {
        (
            EMPTY_ICON,
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Gray),
        )
    };
    let icon = Span::styled(icon, icon_style);
    let label = Span::styled(cell.label.as_str(), Style::default().fg(Color::Gray));

    let paragraph = match style {
        CellStyle::Inline => Paragraph::new(TextLine::from(vec![icon, Span::raw(" "), label])),
        CellStyle::Compact | CellStyle::Boxed => {
            Paragraph::new(Text::from(vec![TextLine::from(icon), TextLine::from(label)]))
        }
    };
    let paragraph = if style == CellStyle::Boxed {
        paragraph.block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        )
    } else {
        paragraph
    };

    paragraph.alignment(Alignment::Center).render(area, buf);
}
