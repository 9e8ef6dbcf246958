use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::schedule::NextEvent;
use crate::tui::theme;
use crate::utils::format::format_countdown;

pub fn render(frame: &mut Frame, area: Rect, next: Option<&NextEvent>) {
    let block = Block::default()
        .title(Span::styled(" Next Prayer ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let content: Vec<Line> = match next {
        None => vec![
            Line::from(""),
            Line::from(Span::styled("  No timings available", theme::dim())),
        ],
        Some(next) => {
            let name = next.entry.name.display_name().to_uppercase();
            let countdown = format_countdown(next.minutes_remaining as i64);
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", name),
                    theme::teal().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("  at {}", next.entry.adhan.format_12h()),
                    theme::dim(),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("  in  ", theme::dim()),
                    Span::styled(countdown, theme::olive().add_modifier(Modifier::BOLD)),
                ]),
            ]
        }
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
