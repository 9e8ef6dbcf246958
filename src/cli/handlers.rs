use anyhow::Result;
use chrono::{Datelike, Local};

use crate::config::AppConfig;
use crate::push::{
    HttpRegistrationEndpoint, PushRegistrar, RegistrationOutcome, SettingsPermission, StaticToken,
};
use crate::schedule::{resolve_next, resolve_next_iqamah, NowInstant, ScheduleModel};
use crate::utils::format::format_countdown;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const TEAL: &str = "\x1b[38;2;20;161;177m";

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(config: &AppConfig, schedule: &ScheduleModel) -> Result<()> {
    let local = Local::now();
    let now = NowInstant::from_local(local.time());
    let today_str = local.format("%A, %b %d, %Y").to_string();

    println!();
    println_colored!(TEAL, "  {} — {}", config.venue.name, today_str);
    println!();

    for entry in schedule.entries() {
        let passed = entry.adhan.minutes_since_midnight() <= now.minutes_since_midnight();
        let style = if passed { DIM } else { BOLD };
        println_colored!(
            style,
            "  {:<9} {:>9}   {:>9}",
            entry.name.display_name(),
            entry.adhan.format_12h(),
            entry.iqamah.format_12h()
        );
        // Sunrise slots in after Fajr, display only
        if entry.name == crate::models::PrayerName::Fajr {
            if let Some(sunrise) = schedule.sunrise() {
                println_colored!(DIM, "  {:<9} {:>9}", "Sunrise", sunrise.format_12h());
            }
        }
    }

    if let Some(jummah) = schedule.jummah_for(local.weekday()) {
        println_colored!(BOLD, "  {:<9} {:>9}", "Jummah", jummah.adhan.format_12h());
    }

    if let Some(next) = resolve_next(schedule, now) {
        println!();
        println_colored!(
            AMBER,
            "  Next: {} in {}",
            next.entry.name.display_name(),
            format_countdown(next.minutes_remaining as i64)
        );
    }
    println!();
    Ok(())
}

// ─── Next ────────────────────────────────────────────────────────────────────

pub fn handle_next(schedule: &ScheduleModel, iqamah: bool) -> Result<()> {
    let now = NowInstant::from_local(Local::now().time());
    let next = if iqamah {
        resolve_next_iqamah(schedule, now)
    } else {
        resolve_next(schedule, now)
    };

    match next {
        Some(next) => {
            let label = if iqamah { "Iqamah" } else { "Adhan" };
            println_colored!(
                AMBER,
                "{} {} in {}",
                next.entry.name.display_name(),
                label,
                format_countdown(next.minutes_remaining as i64)
            );
        }
        None => {
            println_colored!(DIM, "No timings available");
        }
    }
    Ok(())
}

// ─── Register ────────────────────────────────────────────────────────────────

pub fn handle_register(config: &AppConfig) -> Result<()> {
    let permission = SettingsPermission {
        enabled: config.notifications.enabled,
    };
    let tokens = StaticToken::from_config(config.notifications.device_token.clone());
    let endpoint = HttpRegistrationEndpoint::new(&config.notifications.backend_url)?;

    let mut registrar = PushRegistrar::new(permission, tokens, endpoint);

    println_colored!(
        DIM,
        "Registering push token with {} ...",
        config.notifications.backend_url
    );

    // The cancel handle must stay alive for the duration of the run;
    // dropping it reads as teardown to the waiter.
    let (cancel, mut waiter) = crate::push::cancel_pair();
    let outcome = registrar.run(&mut waiter);
    drop(cancel);

    match outcome {
        RegistrationOutcome::Registered => {
            println_colored!(GREEN, "Push token registered.");
        }
        RegistrationOutcome::Denied => {
            println_colored!(RED, "Notifications are disabled; nothing registered.");
            println_colored!(DIM, "Enable them under [notifications] in the config file.");
        }
        RegistrationOutcome::TornDown => {
            println_colored!(DIM, "Registration cancelled.");
        }
    }
    Ok(())
}
