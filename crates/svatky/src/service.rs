use std::path::Path;
use std::sync::Arc;

use crate::config::{resolve_data_path, SvatkyConfig};
use crate::data;
use crate::date::{CalendarDate, DateKey};
use crate::diagnostics::{Diagnostics, Silent};
use crate::greeting::{EmojiRules, GreetingComposer};
use crate::holidays::{HolidayResolver, HolidayTable};
use crate::localization::{localization_for, Czech, Localization, Templates};
use crate::namedays::{NameDayIndex, NameDayTable};
use crate::CelebrationError;

/// Holiday, name-day and greeting lookups for one culture.
pub trait Celebrations {
    fn holiday_for_date(&self, date: CalendarDate) -> Result<Option<&str>, CelebrationError>;

    fn name_days_for_date(&self, date: CalendarDate) -> &[String];

    /// The name day of `name` in `reference_year`, ignoring case and diacritics.
    fn date_for_name(&self, name: &str, reference_year: i32) -> Option<CalendarDate>;

    fn name_day_greeting(&self, date: CalendarDate, template: Option<&str>) -> String;

    fn holiday_announcement(
        &self,
        date: CalendarDate,
        template: Option<&str>,
    ) -> Result<Option<String>, CelebrationError>;

    fn daily_greeting(
        &self,
        date: CalendarDate,
        include_emojis: bool,
    ) -> Result<String, CelebrationError>;
}

/// Immutable after construction and safe to share between threads.
pub struct CelebrationService {
    holidays: HolidayResolver,
    name_days: NameDayIndex,
    composer: GreetingComposer,
    include_emojis: bool,
}

impl CelebrationService {
    pub fn builder() -> CelebrationServiceBuilder {
        CelebrationServiceBuilder::default()
    }

    /// Czech holidays, name days and greetings from the bundled tables.
    pub fn czech() -> Result<Self, CelebrationError> {
        Ok(Self::builder()
            .holidays(data::czech_holidays()?)
            .name_days(data::czech_name_days()?)
            .build())
    }

    /// Assembles a service from configuration. Relative data paths are taken
    /// from `base_dir`, normally the directory holding the config file.
    pub fn from_config(config: &SvatkyConfig, base_dir: &Path) -> Result<Self, CelebrationError> {
        let holidays = match &config.data.holidays {
            Some(path) => data::read_holidays(&resolve_data_path(base_dir, path))?,
            None => data::czech_holidays()?,
        };
        let name_days = match &config.data.name_days {
            Some(path) => data::read_name_days(&resolve_data_path(base_dir, path))?,
            None => data::czech_name_days()?,
        };
        let base = localization_for(&config.locale)?;
        let localization: Box<dyn Localization> = if config.templates.is_empty() {
            base
        } else {
            Box::new(Templates::new(base, config.templates.clone()))
        };
        Ok(Self::builder()
            .holidays(holidays)
            .name_days(name_days)
            .localization(localization)
            .include_emojis(config.include_emojis)
            .diagnostics(config.diagnostics())
            .build())
    }

    /// Reads the TOML config at `path` and builds the service it describes.
    pub fn from_config_file(path: &Path) -> Result<Self, CelebrationError> {
        let config = SvatkyConfig::read(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_config(&config, base_dir)
    }

    pub fn holidays(&self) -> &HolidayResolver {
        &self.holidays
    }

    pub fn name_days(&self) -> &NameDayIndex {
        &self.name_days
    }

    pub fn composer(&self) -> &GreetingComposer {
        &self.composer
    }

    pub fn locale_code(&self) -> &str {
        self.composer.localization().locale_code()
    }

    pub fn date_key_for_name(&self, name: &str) -> Option<DateKey> {
        self.name_days.date_key_for_name(name)
    }

    /// Daily greeting using the configured emoji preference.
    pub fn greeting(&self, date: CalendarDate) -> Result<String, CelebrationError> {
        self.daily_greeting(date, self.include_emojis)
    }
}

impl Celebrations for CelebrationService {
    fn holiday_for_date(&self, date: CalendarDate) -> Result<Option<&str>, CelebrationError> {
        self.holidays.resolve(date)
    }

    fn name_days_for_date(&self, date: CalendarDate) -> &[String] {
        self.name_days.names_for_date(date)
    }

    fn date_for_name(&self, name: &str, reference_year: i32) -> Option<CalendarDate> {
        self.name_days.date_for_name(name, reference_year)
    }

    fn name_day_greeting(&self, date: CalendarDate, template: Option<&str>) -> String {
        self.composer
            .name_day_greeting(self.name_days.names_for_date(date), template)
    }

    fn holiday_announcement(
        &self,
        date: CalendarDate,
        template: Option<&str>,
    ) -> Result<Option<String>, CelebrationError> {
        let holiday = self.holidays.resolve(date)?;
        Ok(self.composer.holiday_announcement(holiday, template))
    }

    fn daily_greeting(
        &self,
        date: CalendarDate,
        include_emojis: bool,
    ) -> Result<String, CelebrationError> {
        let names = self.name_days.names_for_date(date);
        let holiday = self.holidays.resolve(date)?;
        Ok(self.composer.compose_daily(names, holiday, include_emojis))
    }
}

pub struct CelebrationServiceBuilder {
    holidays: HolidayTable,
    name_days: NameDayTable,
    localization: Option<Box<dyn Localization>>,
    emoji: Option<EmojiRules>,
    diagnostics: Arc<dyn Diagnostics>,
    include_emojis: bool,
}

impl Default for CelebrationServiceBuilder {
    fn default() -> Self {
        Self {
            holidays: HolidayTable::new(),
            name_days: NameDayTable::new(),
            localization: None,
            emoji: None,
            diagnostics: Arc::new(Silent),
            include_emojis: true,
        }
    }
}

impl CelebrationServiceBuilder {
    pub fn holidays(mut self, table: HolidayTable) -> Self {
        self.holidays = table;
        self
    }

    pub fn name_days(mut self, table: NameDayTable) -> Self {
        self.name_days = table;
        self
    }

    pub fn localization(mut self, localization: Box<dyn Localization>) -> Self {
        self.localization = Some(localization);
        self
    }

    pub fn emoji(mut self, rules: EmojiRules) -> Self {
        self.emoji = Some(rules);
        self
    }

    pub fn diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn include_emojis(mut self, include: bool) -> Self {
        self.include_emojis = include;
        self
    }

    /// Defaults to the Czech localization; emoji rules follow the locale.
    pub fn build(self) -> CelebrationService {
        let localization = self.localization.unwrap_or_else(|| Box::new(Czech));
        let emoji = self.emoji.unwrap_or_else(|| match localization.locale_code() {
            "en" => EmojiRules::english(),
            _ => EmojiRules::czech(),
        });
        CelebrationService {
            holidays: HolidayResolver::with_diagnostics(self.holidays, self.diagnostics.clone()),
            name_days: NameDayIndex::with_diagnostics(self.name_days, self.diagnostics),
            composer: GreetingComposer::new(localization, emoji),
            include_emojis: self.include_emojis,
        }
    }
}
