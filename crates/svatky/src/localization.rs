use serde::Deserialize;

use crate::CelebrationError;

/// Locale-specific greeting templates and name joining.
///
/// Templates use the placeholders `{names}`, `{holiday}`, `{holiday_emoji}`
/// and `{nameday_emoji}`.
pub trait Localization: Send + Sync {
    fn locale_code(&self) -> &str;

    /// Uses `{names}`.
    fn name_day_template(&self) -> &str;

    /// Uses `{holiday}`.
    fn holiday_template(&self) -> &str;

    /// Uses `{holiday}` and `{names}`.
    fn daily_template(&self) -> &str;

    /// Uses all four placeholders.
    fn daily_emoji_template(&self) -> &str;

    fn format_names(&self, names: &[String]) -> String;
}

/// Joins names as "A, B and C": every name but the last separated by
/// `separator`, then the conjunction and the last name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameJoiner {
    separator: &'static str,
    conjunction: &'static str,
}

impl NameJoiner {
    pub const fn new(separator: &'static str, conjunction: &'static str) -> Self {
        Self {
            separator,
            conjunction,
        }
    }

    pub fn join<S: AsRef<str>>(&self, names: &[S]) -> String {
        match names {
            [] => String::new(),
            [only] => only.as_ref().to_string(),
            [init @ .., last] => {
                let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
                format!(
                    "{} {} {}",
                    head.join(self.separator),
                    self.conjunction,
                    last.as_ref()
                )
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Czech;

impl Czech {
    const JOINER: NameJoiner = NameJoiner::new(", ", "a");
}

impl Localization for Czech {
    fn locale_code(&self) -> &str {
        "cs"
    }

    fn name_day_template(&self) -> &str {
        "Dnes má svátek {names}"
    }

    fn holiday_template(&self) -> &str {
        "Dnes je {holiday}"
    }

    fn daily_template(&self) -> &str {
        "Dnes je {holiday} a svátek má {names}"
    }

    fn daily_emoji_template(&self) -> &str {
        "{holiday_emoji} Dnes je {holiday} a {nameday_emoji} svátek má {names}"
    }

    fn format_names(&self, names: &[String]) -> String {
        Self::JOINER.join(names)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl English {
    const JOINER: NameJoiner = NameJoiner::new(", ", "and");
}

impl Localization for English {
    fn locale_code(&self) -> &str {
        "en"
    }

    fn name_day_template(&self) -> &str {
        "Today is the name day of {names}"
    }

    fn holiday_template(&self) -> &str {
        "Today is {holiday}"
    }

    fn daily_template(&self) -> &str {
        "Today is {holiday} and the name day of {names}"
    }

    fn daily_emoji_template(&self) -> &str {
        "{holiday_emoji} Today is {holiday} and {nameday_emoji} the name day of {names}"
    }

    fn format_names(&self, names: &[String]) -> String {
        Self::JOINER.join(names)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TemplateOverrides {
    #[serde(default)]
    pub name_day: Option<String>,
    #[serde(default)]
    pub holiday: Option<String>,
    #[serde(default)]
    pub daily: Option<String>,
    #[serde(default)]
    pub daily_emoji: Option<String>,
}

impl TemplateOverrides {
    pub fn is_empty(&self) -> bool {
        self.name_day.is_none()
            && self.holiday.is_none()
            && self.daily.is_none()
            && self.daily_emoji.is_none()
    }
}

/// A base localization with some of its templates replaced.
pub struct Templates {
    base: Box<dyn Localization>,
    overrides: TemplateOverrides,
}

impl Templates {
    pub fn new(base: Box<dyn Localization>, overrides: TemplateOverrides) -> Self {
        Self { base, overrides }
    }
}

impl Localization for Templates {
    fn locale_code(&self) -> &str {
        self.base.locale_code()
    }

    fn name_day_template(&self) -> &str {
        self.overrides
            .name_day
            .as_deref()
            .unwrap_or_else(|| self.base.name_day_template())
    }

    fn holiday_template(&self) -> &str {
        self.overrides
            .holiday
            .as_deref()
            .unwrap_or_else(|| self.base.holiday_template())
    }

    fn daily_template(&self) -> &str {
        self.overrides
            .daily
            .as_deref()
            .unwrap_or_else(|| self.base.daily_template())
    }

    fn daily_emoji_template(&self) -> &str {
        self.overrides
            .daily_emoji
            .as_deref()
            .unwrap_or_else(|| self.base.daily_emoji_template())
    }

    fn format_names(&self, names: &[String]) -> String {
        self.base.format_names(names)
    }
}

/// Picks the localization for a locale code such as `cs`, `cs-CZ` or `en_GB`.
pub fn localization_for(code: &str) -> Result<Box<dyn Localization>, CelebrationError> {
    let language = code
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match language.as_str() {
        "cs" | "cz" => Ok(Box::new(Czech)),
        "en" => Ok(Box::new(English)),
        _ => Err(CelebrationError::UnknownLocale(code.to_string())),
    }
}
