use crate::app::LocationPrompt;
use crate::ui::widgets::popup::{centered_fixed, ClearWidget};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_prompt(prompt: &LocationPrompt, f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_fixed(44, 3, area);
    f.render_widget(ClearWidget, popup_area);

    let block = Block::default()
        .title(" Go to location ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let line = TextLine::from(vec![
        Span::styled("> ", Style::default().fg(Color::Green)),
        Span::styled(
            prompt.input.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("█", Style::default().fg(Color::Green)),
    ]);

    f.render_widget(Paragraph::new(line).block(block), popup_area);
}
