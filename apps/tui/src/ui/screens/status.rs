use crate::api::CardSource;
use crate::app::{App, ViewState};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_status<S: CardSource>(app: &App<S>, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    f.render_widget(
        Paragraph::new(location_line(app)).alignment(Alignment::Left),
        columns[0],
    );
    f.render_widget(
        Paragraph::new(shortcuts_line()).alignment(Alignment::Right),
        columns[1],
    );
}

fn location_line<S: CardSource>(app: &App<S>) -> TextLine<'static> {
    let phase = match app.view.state() {
        ViewState::Loading => Span::styled("loading", Style::default().fg(Color::Cyan)),
        ViewState::Error(_) => Span::styled("error", Style::default().fg(Color::Red)),
        ViewState::Loaded(_) => Span::styled("loaded", Style::default().fg(Color::Green)),
    };

    let mut spans = vec![
        Span::styled(
            app.view.location().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        phase,
    ];

    if let Some(settled) = app.last_settled {
        spans.push(Span::styled(
            format!("  at {}", settled.format("%H:%M:%S")),
            Style::default().fg(Color::Gray),
        ));
    }

    if !app.status_message.is_empty() {
        spans.push(Span::styled(
            format!("  {}", app.status_message),
            Style::default().fg(Color::DarkGray),
        ));
    }

    TextLine::from(spans)
}

fn shortcuts_line() -> TextLine<'static> {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let hint = Style::default().fg(Color::Gray);

    TextLine::from(vec![
        Span::styled("←/→", key),
        Span::styled(": Prev/Next | ", hint),
        Span::styled("g", key),
        Span::styled(": Go to | ", hint),
        Span::styled("F1", key),
        Span::styled(": Help | ", hint),
        Span::styled("q", key),
        Span::styled(": Quit", hint),
    ])
}
