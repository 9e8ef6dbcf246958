use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::models::PrayerName;
use crate::schedule::clock::ClockTime;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("schedule is missing required prayer: {missing}")]
pub struct IncompleteScheduleError {
    pub missing: PrayerName,
}

/// One prayer's published times. Iqamah conventionally follows the adhan,
/// but nothing here depends on that; iqamah is only used for display and
/// the footer countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerEntry {
    pub name: PrayerName,
    pub adhan: ClockTime,
    pub iqamah: ClockTime,
}

/// A venue's day object as the directory service publishes it: adhan
/// strings keyed by prayer name, a parallel iqamah object, and an optional
/// Jummah time. Strings arrive in whatever format the venue admin typed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayTimings {
    #[serde(default)]
    pub timings: BTreeMap<String, String>,
    #[serde(default)]
    pub iqamah: BTreeMap<String, String>,
    #[serde(default)]
    pub jummah: Option<String>,
}

pub fn load_day_timings(path: &Path) -> Result<DayTimings> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
    let day: DayTimings =
        serde_json::from_str(&content).with_context(|| format!("Parsing {:?}", path))?;
    Ok(day)
}

/// A day's schedule for one venue: the five daily prayers in canonical
/// order, plus the optional Friday congregation and a display-only sunrise
/// time. Immutable once built; replaced wholesale when the day or the
/// selected venue changes.
#[derive(Debug, Clone)]
pub struct ScheduleModel {
    daily: Vec<PrayerEntry>,
    sunrise: Option<ClockTime>,
    jummah: Option<PrayerEntry>,
}

impl ScheduleModel {
    /// Builds the canonical schedule from a day object. A day missing any
    /// of the five daily adhan keys is rejected outright; a key that is
    /// present but unparseable degrades to 00:00 with a warning, so one bad
    /// field never blanks the whole day.
    pub fn from_day_timings(day: &DayTimings) -> Result<Self, IncompleteScheduleError> {
        let mut daily = Vec::with_capacity(5);
        for name in PrayerName::daily() {
            let raw_adhan = day
                .timings
                .get(name.display_name())
                .ok_or(IncompleteScheduleError { missing: name })?;
            let adhan = parse_or_midnight(name, "adhan", raw_adhan);
            // Venues that publish no iqamah for a prayer get the adhan
            // time echoed, as the mobile table does.
            let iqamah = match day.iqamah.get(name.display_name()) {
                Some(raw) => parse_or_midnight(name, "iqamah", raw),
                None => adhan,
            };
            daily.push(PrayerEntry { name, adhan, iqamah });
        }

        let sunrise = day
            .timings
            .get(PrayerName::Sunrise.display_name())
            .and_then(|raw| match raw.parse() {
                Ok(t) => Some(t),
                Err(err) => {
                    log::warn!("ignoring sunrise time: {err}");
                    None
                }
            });

        // Jummah lives either in the timings object or in the dedicated
        // field, depending on which backend version produced the day.
        let jummah = day
            .timings
            .get(PrayerName::Jummah.display_name())
            .or(day.jummah.as_ref())
            .map(|raw| {
                let time = parse_or_midnight(PrayerName::Jummah, "adhan", raw);
                PrayerEntry {
                    name: PrayerName::Jummah,
                    adhan: time,
                    iqamah: time,
                }
            });

        Ok(ScheduleModel {
            daily,
            sunrise,
            jummah,
        })
    }

    /// The five daily prayers, canonical order.
    pub fn entries(&self) -> &[PrayerEntry] {
        &self.daily
    }

    pub fn by_name(&self, name: PrayerName) -> Option<&PrayerEntry> {
        self.daily.iter().find(|e| e.name == name)
    }

    pub fn sunrise(&self) -> Option<ClockTime> {
        self.sunrise
    }

    pub fn jummah(&self) -> Option<&PrayerEntry> {
        self.jummah.as_ref()
    }

    /// The Friday congregation, gated on the day actually being Friday.
    /// Jummah never participates in next-event resolution or the clock
    /// face; screens that want it ask here.
    pub fn jummah_for(&self, weekday: chrono::Weekday) -> Option<&PrayerEntry> {
        if weekday == chrono::Weekday::Fri {
            self.jummah.as_ref()
        } else {
            None
        }
    }
}

fn parse_or_midnight(name: PrayerName, kind: &str, raw: &str) -> ClockTime {
    match raw.parse() {
        Ok(time) => time,
        Err(err) => {
            log::warn!("{name} {kind}: {err}; defaulting to 00:00");
            ClockTime::MIDNIGHT
        }
    }
}
