use crate::ui::present::{CardScreen, Screen};
use crate::ui::widgets::popup::centered_fixed;
use crate::ui::widgets::stamp_grid::StampGrid;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState, WhichUse, BRAILLE_SIX};

const CARD_MAX_WIDTH: u16 = 96;

pub fn render_screen(screen: &Screen, throbber: &ThrobberState, f: &mut Frame<'_>, area: Rect) {
    match screen {
        Screen::Loading => render_loading(throbber, f, area),
        Screen::Error { message } => render_error(message, f, area),
        Screen::Loaded(card) => render_card(card, f, area),
    }
}

fn render_loading(throbber: &ThrobberState, f: &mut Frame<'_>, area: Rect) {
    let widget = Throbber::default()
        .label("Loading...")
        .style(Style::default().fg(Color::Gray))
        .throbber_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);

    let mut state = throbber.clone();
    f.render_stateful_widget(widget, centered_fixed(12, 1, area), &mut state);
}

fn render_error(message: &str, f: &mut Frame<'_>, area: Rect) {
    let width = u16::try_from(message.chars().count())
        .unwrap_or(u16::MAX)
        .clamp(1, area.width.max(1));
    let paragraph = Paragraph::new(Text::from(TextLine::from(Span::styled(
        message,
        Style::default().fg(Color::Red),
    ))))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    // Centre on the estimated height but let the text run to the bottom of
    // the area, so an underestimate never clips the end of the message.
    let top = centered_fixed(width, wrapped_lines(message, width), area);
    let rect = Rect {
        height: area.bottom().saturating_sub(top.y),
        ..top
    };
    f.render_widget(paragraph, rect);
}

/// Lines `message` takes when word-wrapped to `width` columns.
fn wrapped_lines(message: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut lines = 1_usize;
    let mut line_len = 0_usize;
    for word in message.split_whitespace() {
        let len = word.chars().count();
        if line_len == 0 {
            line_len = len;
        } else if line_len + 1 + len <= width {
            line_len += 1 + len;
        } else {
            lines += 1;
            line_len = len;
        }
        // Words longer than a line are broken across several.
        if line_len > width {
            lines += (line_len - 1) / width;
            line_len = (line_len - 1) % width + 1;
        }
    }
    u16::try_from(lines).unwrap_or(u16::MAX)
}

pub fn card_area(area: Rect) -> Rect {
    let width = area.width.min(CARD_MAX_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn render_card(card: &CardScreen, f: &mut Frame<'_>, area: Rect) {
    let area = card_area(area);
    let block = Block::default()
        .title(" Stamp Card ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Margins, header, spacers, bar and caption take nine lines; the grid gets the rest.
    let grid_height = StampGrid::fitted_height(card.cells.len(), inner.height.saturating_sub(9));

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Spacer
            Constraint::Length(grid_height),
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Progress bar
            Constraint::Length(1), // Caption
            Constraint::Min(0),
        ])
        .split(inner);

    render_header(card, f, layout[0]);
    f.render_widget(StampGrid::new(&card.cells), layout[2]);
    render_progress(card, f, layout[4], layout[5]);
}

fn render_header(card: &CardScreen, f: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        TextLine::from(Span::styled(
            card.period.as_str(),
            Style::default().fg(Color::Gray),
        )),
        TextLine::from(Span::styled(
            card.name.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            card.card_no.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let header = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn render_progress(card: &CardScreen, f: &mut Frame<'_>, bar_area: Rect, caption_area: Rect) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .ratio(card.progress.clamp(0.0, 1.0))
        .label(format!("{}%", card.progress_label))
        .use_unicode(true);
    f.render_widget(gauge, bar_area);

    let caption = Paragraph::new(Span::styled(
        card.caption.as_str(),
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);
    f.render_widget(caption, caption_area);
}
