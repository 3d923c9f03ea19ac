//! Holidays, name days and the greetings composed from them.
//!
//! The crate answers two questions about a civil calendar date: whether it is
//! a (fixed or Easter-relative) holiday, and whose name day falls on it. The
//! answers are combined into localized greeting text.

pub mod config;
pub mod data;
pub mod date;
pub mod diagnostics;
pub mod easter;
pub mod greeting;
pub mod holidays;
pub mod localization;
pub mod namedays;
pub mod service;

pub use config::{DataConfig, SvatkyConfig};
pub use date::{CalendarDate, DateKey};
pub use diagnostics::{Diagnostics, JsonLines, Level, Silent};
pub use easter::{easter_sunday, FIRST_GREGORIAN_YEAR, LAST_SUPPORTED_YEAR};
pub use greeting::{EmojiRules, GreetingComposer};
pub use holidays::{HolidayResolver, HolidayTable, MovableHoliday, MOVABLE_HOLIDAYS_KEY};
pub use localization::{
    localization_for, Czech, English, Localization, NameJoiner, TemplateOverrides, Templates,
};
pub use namedays::{normalize_name, NameDayIndex, NameDayTable};
pub use service::{CelebrationService, CelebrationServiceBuilder, Celebrations};

#[derive(Debug, thiserror::Error)]
pub enum CelebrationError {
    #[error("year {0} is outside the supported Gregorian range")]
    InvalidYear(i32),
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    MalformedDate { year: i32, month: u32, day: u32 },
    #[error("invalid date key `{0}`, expected MM-DD")]
    InvalidDateKey(String),
    #[error("data error: {0}")]
    Data(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("no localization for locale `{0}`")]
    UnknownLocale(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
