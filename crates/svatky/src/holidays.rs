use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Deserialize;

use crate::data::OrderedEntries;
use crate::date::{CalendarDate, DateKey};
use crate::diagnostics::{emit_with, Diagnostics, Level, Silent};
use crate::easter::easter_sunday;
use crate::CelebrationError;

/// Reserved top-level key holding the Easter-relative entries of a holiday table.
pub const MOVABLE_HOLIDAYS_KEY: &str = "__movable_holidays__";

/// A holiday `offset` days from Easter Sunday (negative offsets precede it).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovableHoliday {
    pub offset: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct HolidayTable {
    fixed: HashMap<DateKey, String>,
    movable: Vec<MovableHoliday>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HolidayEntry {
    Fixed(String),
    Movable(OrderedEntries<MovableHoliday>),
}

impl HolidayTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the JSON holiday document: `"MM-DD": name` pairs plus an
    /// optional `__movable_holidays__` object of `{offset, name}` records,
    /// kept in document order.
    pub fn from_json_str(text: &str) -> Result<Self, CelebrationError> {
        let document: OrderedEntries<HolidayEntry> = serde_json::from_str(text)
            .map_err(|err| CelebrationError::Data(format!("holiday table: {err}")))?;
        let mut table = Self::new();
        for (key, entry) in document.0 {
            match (key == MOVABLE_HOLIDAYS_KEY, entry) {
                (false, HolidayEntry::Fixed(name)) => {
                    table.insert_fixed(key.parse()?, name);
                }
                (true, HolidayEntry::Movable(entries)) => {
                    for (_, holiday) in entries.0 {
                        table.push_movable(holiday.offset, holiday.name);
                    }
                }
                (true, HolidayEntry::Fixed(_)) => {
                    return Err(CelebrationError::Data(format!(
                        "holiday table: `{MOVABLE_HOLIDAYS_KEY}` must be an object"
                    )));
                }
                (false, HolidayEntry::Movable(_)) => {
                    return Err(CelebrationError::Data(format!(
                        "holiday table: `{key}` must map to a holiday name"
                    )));
                }
            }
        }
        Ok(table)
    }

    pub fn with_fixed(mut self, key: DateKey, name: impl Into<String>) -> Self {
        self.insert_fixed(key, name);
        self
    }

    pub fn with_movable(mut self, offset: i64, name: impl Into<String>) -> Self {
        self.push_movable(offset, name);
        self
    }

    /// Returns the name previously stored under `key`, which is replaced.
    pub fn insert_fixed(&mut self, key: DateKey, name: impl Into<String>) -> Option<String> {
        self.fixed.insert(key, name.into())
    }

    pub fn push_movable(&mut self, offset: i64, name: impl Into<String>) {
        self.movable.push(MovableHoliday {
            offset,
            name: name.into(),
        });
    }

    pub fn fixed(&self, key: DateKey) -> Option<&str> {
        self.fixed.get(&key).map(String::as_str)
    }

    pub fn fixed_len(&self) -> usize {
        self.fixed.len()
    }

    pub fn movable(&self) -> &[MovableHoliday] {
        &self.movable
    }

    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty() && self.movable.is_empty()
    }

    /// Offsets shared by more than one movable entry, with the names in list
    /// order. Only the last name of each group is ever resolved.
    pub fn movable_collisions(&self) -> Vec<(i64, Vec<&str>)> {
        let mut groups: BTreeMap<i64, Vec<&str>> = BTreeMap::new();
        for holiday in &self.movable {
            groups
                .entry(holiday.offset)
                .or_default()
                .push(holiday.name.as_str());
        }
        groups
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .collect()
    }
}

/// Answers "is this date a holiday" from fixed and Easter-relative entries.
///
/// Fixed entries always take precedence. Among movable entries landing on the
/// same date the one listed last wins.
pub struct HolidayResolver {
    table: HolidayTable,
    diagnostics: Arc<dyn Diagnostics>,
}

impl HolidayResolver {
    pub fn new(table: HolidayTable) -> Self {
        Self::with_diagnostics(table, Arc::new(Silent))
    }

    pub fn with_diagnostics(table: HolidayTable, diagnostics: Arc<dyn Diagnostics>) -> Self {
        for (offset, names) in table.movable_collisions() {
            emit_with(
                diagnostics.as_ref(),
                Level::Warn,
                "movable holidays share an offset; the last one wins",
                || {
                    vec![
                        ("offset", offset.to_string()),
                        ("names", names.join(", ")),
                        ("winner", names.last().copied().unwrap_or_default().to_string()),
                    ]
                },
            );
        }
        Self { table, diagnostics }
    }

    pub fn table(&self) -> &HolidayTable {
        &self.table
    }

    pub fn easter_sunday(&self, year: i32) -> Result<CalendarDate, CelebrationError> {
        easter_sunday(year)
    }

    pub fn resolve(&self, date: CalendarDate) -> Result<Option<&str>, CelebrationError> {
        if let Some(name) = self.table.fixed(date.key()) {
            return Ok(Some(name));
        }
        if self.table.movable.is_empty() {
            return Ok(None);
        }

        let easter = easter_sunday(date.year())?;
        emit_with(
            self.diagnostics.as_ref(),
            Level::Debug,
            "easter sunday computed",
            || {
                vec![
                    ("year", date.year().to_string()),
                    ("easter_sunday", easter.to_string()),
                    ("checking", date.to_string()),
                ]
            },
        );

        let mut found = None;
        for (holiday, candidate) in self.candidates(easter) {
            if candidate == date {
                found = Some(holiday.name.as_str());
            }
        }
        Ok(found)
    }

    /// The year's movable holidays ordered by date, after collisions are settled.
    pub fn movable_holidays(
        &self,
        year: i32,
    ) -> Result<Vec<(CalendarDate, String)>, CelebrationError> {
        let easter = easter_sunday(year)?;
        let mut by_date: BTreeMap<CalendarDate, &str> = BTreeMap::new();
        for (holiday, candidate) in self.candidates(easter) {
            by_date.insert(candidate, holiday.name.as_str());
        }
        Ok(by_date
            .into_iter()
            .map(|(date, name)| (date, name.to_string()))
            .collect())
    }

    fn candidates(
        &self,
        easter: CalendarDate,
    ) -> impl Iterator<Item = (&MovableHoliday, CalendarDate)> + '_ {
        self.table.movable.iter().filter_map(move |holiday| {
            let candidate = easter.add_days(holiday.offset);
            emit_with(
                self.diagnostics.as_ref(),
                Level::Trace,
                "movable holiday candidate",
                || {
                    vec![
                        ("holiday", holiday.name.clone()),
                        ("offset", holiday.offset.to_string()),
                        (
                            "date",
                            candidate.map(|date| date.to_string()).unwrap_or_default(),
                        ),
                    ]
                },
            );
            candidate.map(|date| (holiday, date))
        })
    }
}
