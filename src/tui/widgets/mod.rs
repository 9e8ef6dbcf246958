pub mod clockface;
pub mod footer_iqamah;
pub mod header;
pub mod next_prayer;
pub mod timetable;
