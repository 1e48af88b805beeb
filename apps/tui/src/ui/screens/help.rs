use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const BINDINGS: [(&str, &str); 5] = [
    ("← / p", "Previous card number"),
    ("→ / n", "Next card number"),
    ("g or /", "Go to a location, e.g. /42"),
    ("F1", "Toggle this help"),
    ("q / Esc", "Quit"),
];

pub fn render_help(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(60, 50, area);
    f.render_widget(ClearWidget, popup_area);

    let block = Block::default()
        .title("== Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let mut lines = vec![TextLine::from("")];
    lines.extend(BINDINGS.iter().map(|(keys, action)| {
        TextLine::from(vec![
            Span::styled(
                format!("{keys:>10}  "),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*action, Style::default().fg(Color::White)),
        ])
    }));
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "Press F1 or Esc to close",
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, popup_area);
}
