use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::schedule::ClockFaceView;
use crate::tui::theme;

/// The dial's marker list: the prayers the radial view would pin around
/// the face right now. In the Isha→Fajr window this collapses to Fajr
/// alone, mirroring the dial.
pub fn render(frame: &mut Frame, area: Rect, view: Option<&ClockFaceView>) {
    let block = Block::default()
        .title(Span::styled(" Clock Face ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let mut lines: Vec<Line> = vec![Line::from("")];
    match view {
        None => {
            lines.push(Line::from(Span::styled(
                "  No timings available",
                theme::dim(),
            )));
        }
        Some(view) => {
            for (idx, entry) in view.visible.iter().enumerate() {
                let highlighted = idx == view.highlighted;
                let (marker, style) = if highlighted {
                    ("● ", theme::teal().add_modifier(Modifier::BOLD))
                } else {
                    ("○ ", theme::dim())
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}", marker), style),
                    Span::styled(format!("{:<9}", entry.name.display_name()), style),
                    Span::styled(entry.adhan.format_compact(), style),
                ]));
            }
        }
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
