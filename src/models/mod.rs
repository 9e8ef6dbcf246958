pub mod prayer;

pub use prayer::PrayerName;
