mod cli;
mod config;
mod models;
mod push;
mod schedule;
mod tui;
mod utils;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use schedule::ScheduleModel;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    let schedule_path = match cli.schedule {
        Some(path) => path,
        None => match &config.venue.schedule_path {
            Some(path) => path.clone(),
            None => AppConfig::default_schedule_path()?,
        },
    };

    match cli.command {
        Some(Commands::Times) => {
            let schedule = load_schedule(&schedule_path)?;
            handlers::handle_times(&config, &schedule)?;
        }
        Some(Commands::Next { iqamah }) => {
            let schedule = load_schedule(&schedule_path)?;
            handlers::handle_next(&schedule, iqamah)?;
        }
        Some(Commands::Register) => {
            handlers::handle_register(&config)?;
        }

        // No subcommand → launch the dashboard. A day that fails to load
        // renders as "no timings available" instead of exiting; a missing
        // prayer in the day is exactly the case that must not resolve.
        None => {
            let schedule = match load_schedule(&schedule_path) {
                Ok(schedule) => Some(schedule),
                Err(err) => {
                    log::warn!("no usable schedule: {err:#}");
                    None
                }
            };
            tui::app::run(config, schedule)?;
        }
    }

    Ok(())
}

fn load_schedule(path: &Path) -> Result<ScheduleModel> {
    let day = schedule::load_day_timings(path)?;
    let model = ScheduleModel::from_day_timings(&day).context("No timings available")?;
    Ok(model)
}
