use chrono::Weekday;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::PrayerName;
use crate::schedule::{NowInstant, PrayerEntry, ScheduleModel};
use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    schedule: &ScheduleModel,
    now: NowInstant,
    today: Weekday,
    next: Option<PrayerName>,
) {
    let block = Block::default()
        .title(Span::styled(" Timetable ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let mut items: Vec<ListItem> = Vec::new();
    items.push(column_headings());

    for entry in schedule.entries() {
        items.push(prayer_row(entry, now, next));
        if entry.name == PrayerName::Fajr {
            if let Some(sunrise) = schedule.sunrise() {
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(format!("  {:<9}", "Sunrise"), theme::dim()),
                    Span::styled(format!("{:>9}", sunrise.format_12h()), theme::dim()),
                ])));
            }
        }
    }

    if let Some(jummah) = schedule.jummah_for(today) {
        items.push(prayer_row(jummah, now, next));
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn column_headings() -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(format!("  {:<9}", ""), theme::dim()),
        Span::styled(format!("{:>9}", "Adhan"), theme::dim()),
        Span::styled(format!("{:>11}", "Iqamah"), theme::dim()),
    ]))
}

fn prayer_row<'a>(
    entry: &'a PrayerEntry,
    now: NowInstant,
    next: Option<PrayerName>,
) -> ListItem<'a> {
    let passed = entry.adhan.minutes_since_midnight() <= now.minutes_since_midnight();
    let is_next = next == Some(entry.name);

    let (marker, name_style) = if is_next {
        ("▸ ", theme::teal().add_modifier(Modifier::BOLD))
    } else if passed {
        ("  ", theme::dim())
    } else {
        ("  ", theme::bold())
    };
    let time_style = if is_next {
        theme::teal()
    } else if passed {
        theme::dim()
    } else {
        theme::base().bg(theme::SURFACE)
    };

    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{}{:<7}", marker, entry.name.display_name()),
            name_style,
        ),
        Span::styled(format!("{:>9}", entry.adhan.format_12h()), time_style),
        Span::styled(format!("{:>11}", entry.iqamah.format_12h()), time_style),
    ]))
}
