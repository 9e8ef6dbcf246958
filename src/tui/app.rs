use std::time::Duration;

use anyhow::Result;
use chrono::{Datelike, Local, Weekday};
use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::config::AppConfig;
use crate::push::{
    self, HttpRegistrationEndpoint, PushRegistrar, SchedulerHandle, SettingsPermission,
    StaticToken,
};
use crate::schedule::{clock_face, resolve_next, resolve_next_iqamah, NowInstant, ScheduleModel};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{clockface, footer_iqamah, header, next_prayer, timetable};

pub struct App {
    pub config: AppConfig,
    pub schedule: Option<ScheduleModel>,
    pub now: NowInstant,
    pub today: Weekday,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, schedule: Option<ScheduleModel>) -> Self {
        let local = Local::now();
        App {
            config,
            schedule,
            now: NowInstant::from_local(local.time()),
            today: local.weekday(),
            should_quit: false,
        }
    }

    /// Ticks carry no payload; "now" is re-read here so every consumer
    /// sees the same instant for the whole frame.
    fn on_tick(&mut self) {
        let local = Local::now();
        self.now = NowInstant::from_local(local.time());
        self.today = local.weekday();
    }

    fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        frame.render_widget(
            ratatui::widgets::Block::default().style(theme::base()),
            frame.area(),
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(frame.area());

        header::render(frame, rows[0], &self.config.venue.name, self.now);

        let Some(schedule) = &self.schedule else {
            let notice = Paragraph::new(vec![
                Line::from(""),
                Line::from("No timings available"),
                Line::from(""),
            ])
            .style(theme::dim())
            .alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(notice, rows[1]);
            footer_iqamah::render(frame, rows[2], None);
            return;
        };

        let next = resolve_next(schedule, self.now);
        let next_iqamah = resolve_next_iqamah(schedule, self.now);
        let face = clock_face(schedule, self.now);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);

        timetable::render(
            frame,
            columns[0],
            schedule,
            self.now,
            self.today,
            next.map(|n| n.entry.name),
        );

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(5)])
            .split(columns[1]);

        next_prayer::render(frame, right[0], next.as_ref());
        clockface::render(frame, right[1], Some(&face));

        footer_iqamah::render(frame, rows[2], next_iqamah.as_ref());
    }
}

/// Run the dashboard event loop. The push registrar is started alongside
/// it and torn down with it, so a pending retry never outlives the screen.
pub fn run(config: AppConfig, schedule: Option<ScheduleModel>) -> Result<()> {
    let push_handle = start_push_registration(&config);

    let mut app = App::new(config, schedule);
    let mut terminal = ratatui::init();
    let events = EventHandler::new(Duration::from_millis(app.config.ui.tick_ms));

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key);
                if app.should_quit {
                    break;
                }
            }
            Event::Tick => {
                app.on_tick();
            }
        }
    }

    ratatui::restore();

    if let Some(handle) = push_handle {
        handle.shutdown();
    }
    Ok(())
}

fn start_push_registration(config: &AppConfig) -> Option<SchedulerHandle> {
    if !config.notifications.enabled {
        return None;
    }
    match HttpRegistrationEndpoint::new(&config.notifications.backend_url) {
        Ok(endpoint) => {
            let registrar = PushRegistrar::new(
                SettingsPermission {
                    enabled: config.notifications.enabled,
                },
                StaticToken::from_config(config.notifications.device_token.clone()),
                endpoint,
            );
            Some(push::spawn(registrar))
        }
        Err(err) => {
            log::warn!("push registration unavailable: {err:#}");
            None
        }
    }
}
