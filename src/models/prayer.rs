#![allow(dead_code)]
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The prayers a venue publishes times for. Sunrise is informational only
/// and never a countdown target; Jummah is the Friday congregation and is
/// queried separately from the daily five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerName {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
    Jummah,
}

impl PrayerName {
    /// The five daily prayers in canonical order.
    pub fn daily() -> [PrayerName; 5] {
        [
            PrayerName::Fajr,
            PrayerName::Dhuhr,
            PrayerName::Asr,
            PrayerName::Maghrib,
            PrayerName::Isha,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "fajr",
            PrayerName::Sunrise => "sunrise",
            PrayerName::Dhuhr => "dhuhr",
            PrayerName::Asr => "asr",
            PrayerName::Maghrib => "maghrib",
            PrayerName::Isha => "isha",
            PrayerName::Jummah => "jummah",
        }
    }

    /// Capitalized name, matching the keys the directory service publishes.
    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Sunrise => "Sunrise",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
            PrayerName::Jummah => "Jummah",
        }
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" => Ok(PrayerName::Fajr),
            "sunrise" | "shuruq" => Ok(PrayerName::Sunrise),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerName::Dhuhr),
            "asr" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" => Ok(PrayerName::Isha),
            "jummah" | "jumah" | "jumma" => Ok(PrayerName::Jummah),
            _ => Err(anyhow::anyhow!("Unknown prayer name: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_order_is_canonical() {
        let daily = PrayerName::daily();
        assert_eq!(daily[0], PrayerName::Fajr);
        assert_eq!(daily[4], PrayerName::Isha);
        assert!(!daily.contains(&PrayerName::Sunrise));
        assert!(!daily.contains(&PrayerName::Jummah));
    }

    #[test]
    fn parses_spelling_variants() {
        assert_eq!("Zuhr".parse::<PrayerName>().unwrap(), PrayerName::Dhuhr);
        assert_eq!("jumma".parse::<PrayerName>().unwrap(), PrayerName::Jummah);
        assert!("tahajjud".parse::<PrayerName>().is_err());
    }
}
