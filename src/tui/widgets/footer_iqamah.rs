use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::schedule::NextEvent;
use crate::tui::theme;
use crate::utils::format::format_countdown;

pub fn render(frame: &mut Frame, area: Rect, next_iqamah: Option<&NextEvent>) {
    let mut spans = Vec::new();

    if let Some(next) = next_iqamah {
        spans.push(Span::styled(
            format!(
                "{} Iqamah in {}",
                next.entry.name.display_name(),
                format_countdown(next.minutes_remaining as i64)
            ),
            theme::olive(),
        ));
        spans.push(Span::styled("   ", theme::dim()));
    }
    spans.push(Span::styled("[Esc]", theme::teal()));
    spans.push(Span::styled(" quit", theme::dim()));

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
