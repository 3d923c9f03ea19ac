use crate::localization::Localization;

pub const NAME_DAY_EMOJI: &str = "🎂";
pub const NO_HOLIDAY_EMOJI: &str = "📅";
pub const FALLBACK_HOLIDAY_EMOJI: &str = "🎯";

#[derive(Debug, Clone, PartialEq, Eq)]
struct EmojiRule {
    keyword: String,
    emoji: String,
}

/// Ordered keyword rules mapping holiday names to emojis.
///
/// The first rule whose keyword occurs in the holiday name (ignoring case)
/// wins, so more specific keywords belong earlier in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiRules {
    rules: Vec<EmojiRule>,
    no_holiday: String,
    fallback: String,
    name_day: String,
}

impl Default for EmojiRules {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            no_holiday: NO_HOLIDAY_EMOJI.to_string(),
            fallback: FALLBACK_HOLIDAY_EMOJI.to_string(),
            name_day: NAME_DAY_EMOJI.to_string(),
        }
    }
}

impl EmojiRules {
    pub fn new<I, K, E>(rules: I) -> Self
    where
        I: IntoIterator<Item = (K, E)>,
        K: Into<String>,
        E: Into<String>,
    {
        rules
            .into_iter()
            .fold(Self::default(), |acc, (keyword, emoji)| acc.with_rule(keyword, emoji))
    }

    pub fn czech() -> Self {
        Self::new([
            ("Štědrý den", "🎄"),
            ("svátek vánoční", "🎄"),
            ("Silvestr", "🎉"),
            ("Nový rok", "🎊"),
            ("Velikonoční", "🐰"),
            ("Velký pátek", "✝️"),
            ("Svátek práce", "👷"),
            ("Den vítězství", "🎖️"),
            ("Den české státnosti", "🇨🇿"),
            ("Den vzniku samostatného československého státu", "🇨🇿"),
            ("Den boje za svobodu a demokracii", "🕊️"),
            ("upálení", "🔥"),
            ("Cyrila a Metoděje", "📚"),
        ])
    }

    pub fn english() -> Self {
        Self::new([
            ("Christmas Eve", "🎄"),
            ("Christmas", "🎄"),
            ("New Year's Eve", "🎉"),
            ("New Year", "🎊"),
            ("Easter", "🐰"),
            ("Good Friday", "✝️"),
            ("Labour Day", "👷"),
            ("Victory", "🎖️"),
            ("Statehood", "🇨🇿"),
            ("Independence", "🇨🇿"),
            ("Freedom", "🕊️"),
            ("Jan Hus", "🔥"),
            ("Cyril and Methodius", "📚"),
        ])
    }

    pub fn with_rule(mut self, keyword: impl Into<String>, emoji: impl Into<String>) -> Self {
        self.rules.push(EmojiRule {
            keyword: keyword.into().to_lowercase(),
            emoji: emoji.into(),
        });
        self
    }

    pub fn with_fallbacks(
        mut self,
        no_holiday: impl Into<String>,
        fallback: impl Into<String>,
        name_day: impl Into<String>,
    ) -> Self {
        self.no_holiday = no_holiday.into();
        self.fallback = fallback.into();
        self.name_day = name_day.into();
        self
    }

    pub fn holiday_emoji(&self, holiday: Option<&str>) -> &str {
        let Some(holiday) = holiday else {
            return &self.no_holiday;
        };
        let lowered = holiday.to_lowercase();
        self.rules
            .iter()
            .find(|rule| lowered.contains(rule.keyword.as_str()))
            .map(|rule| rule.emoji.as_str())
            .unwrap_or(self.fallback.as_str())
    }

    pub fn name_day_emoji(&self) -> &str {
        &self.name_day
    }
}

/// Builds greeting text from already resolved holiday and name-day data.
pub struct GreetingComposer {
    localization: Box<dyn Localization>,
    emoji: EmojiRules,
}

impl GreetingComposer {
    pub fn new(localization: Box<dyn Localization>, emoji: EmojiRules) -> Self {
        Self {
            localization,
            emoji,
        }
    }

    pub fn localization(&self) -> &dyn Localization {
        self.localization.as_ref()
    }

    pub fn emoji(&self) -> &EmojiRules {
        &self.emoji
    }

    /// Empty when nobody celebrates.
    pub fn name_day_greeting(&self, names: &[String], template: Option<&str>) -> String {
        if names.is_empty() {
            return String::new();
        }
        let template = template.unwrap_or_else(|| self.localization.name_day_template());
        let formatted = self.localization.format_names(names);
        render(template, &[("names", formatted.as_str())])
    }

    pub fn holiday_announcement(
        &self,
        holiday: Option<&str>,
        template: Option<&str>,
    ) -> Option<String> {
        let holiday = holiday.filter(|name| !name.is_empty())?;
        let template = template.unwrap_or_else(|| self.localization.holiday_template());
        Some(render(template, &[("holiday", holiday)]))
    }

    pub fn compose_daily(
        &self,
        names: &[String],
        holiday: Option<&str>,
        include_emojis: bool,
    ) -> String {
        let holiday = holiday.filter(|name| !name.is_empty());
        let formatted = self.localization.format_names(names);
        match (names.is_empty(), holiday) {
            (true, None) => String::new(),
            (false, None) => {
                let body = render(
                    self.localization.name_day_template(),
                    &[("names", formatted.as_str())],
                );
                prefixed(include_emojis, self.emoji.name_day_emoji(), body)
            }
            (true, Some(holiday)) => {
                let body = render(
                    self.localization.holiday_template(),
                    &[("holiday", holiday)],
                );
                let emoji = self.emoji.holiday_emoji(Some(holiday));
                prefixed(include_emojis, emoji, body)
            }
            (false, Some(holiday)) if include_emojis => render(
                self.localization.daily_emoji_template(),
                &[
                    ("holiday", holiday),
                    ("names", formatted.as_str()),
                    ("holiday_emoji", self.emoji.holiday_emoji(Some(holiday))),
                    ("nameday_emoji", self.emoji.name_day_emoji()),
                ],
            ),
            (false, Some(holiday)) => render(
                self.localization.daily_template(),
                &[("holiday", holiday), ("names", formatted.as_str())],
            ),
        }
    }
}

fn prefixed(include_emojis: bool, emoji: &str, body: String) -> String {
    if include_emojis {
        format!("{emoji} {body}")
    } else {
        body
    }
}

/// Substitutes `{placeholder}`s in a single pass. Unknown placeholders are
/// left as written, and substituted text is never scanned again.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        let name = &tail[1..end];
        if name.contains('{') {
            out.push('{');
            rest = &tail[1..];
            continue;
        }
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }
    out.push_str(rest);
    out
}
