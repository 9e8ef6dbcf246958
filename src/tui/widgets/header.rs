use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::schedule::NowInstant;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, venue: &str, now: NowInstant) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::teal().add_modifier(Modifier::BOLD))
        .style(theme::base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(2)])
        .split(inner);

    let date_str = Local::now().format("%A, %b %d, %Y").to_string();
    let title = Line::from(vec![
        Span::styled(format!("  {}  ", venue), theme::teal().add_modifier(Modifier::BOLD)),
        Span::styled("·  ", theme::dim()),
        Span::styled(date_str, theme::dim()),
    ]);
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        rows[0],
    );

    let clock_str = format!("{}:{:02}", now.clock_time().format_compact(), now.seconds());
    let clock = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(theme::teal())
        .alignment(Alignment::Center)
        .lines(vec![clock_str.into()])
        .build();
    frame.render_widget(clock, rows[1]);
}
