use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::data::OrderedEntries;
use crate::date::{CalendarDate, DateKey};
use crate::diagnostics::{emit_with, Diagnostics, Level, Silent};
use crate::CelebrationError;

/// Lowercases, trims and strips diacritics: "  Kašpar " and "kaspar" compare equal.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .trim()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect()
}

/// Names per month/day, in table order.
#[derive(Debug, Clone, Default)]
pub struct NameDayTable {
    entries: Vec<(DateKey, Vec<String>)>,
    positions: HashMap<DateKey, usize>,
}

impl NameDayTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes `{"MM-DD": [names...]}`; table order follows the document.
    pub fn from_json_str(text: &str) -> Result<Self, CelebrationError> {
        let document: OrderedEntries<Vec<String>> = serde_json::from_str(text)
            .map_err(|err| CelebrationError::Data(format!("name-day table: {err}")))?;
        let mut table = Self::new();
        for (key, names) in document.0 {
            table.insert(key.parse()?, names);
        }
        Ok(table)
    }

    pub fn with_names<I, S>(mut self, key: DateKey, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(key, names.into_iter().map(Into::into).collect());
        self
    }

    /// Stores `names` under `key`. A repeated key replaces the earlier names
    /// but keeps the key's original table position.
    pub fn insert(&mut self, key: DateKey, names: Vec<String>) -> Option<Vec<String>> {
        match self.positions.get(&key) {
            Some(&index) => Some(std::mem::replace(&mut self.entries[index].1, names)),
            None => {
                self.positions.insert(key, self.entries.len());
                self.entries.push((key, names));
                None
            }
        }
    }

    pub fn names(&self, key: DateKey) -> &[String] {
        self.positions
            .get(&key)
            .map(|&index| self.entries[index].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (DateKey, &[String])> + '_ {
        self.entries
            .iter()
            .map(|(key, names)| (*key, names.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Bidirectional date/name lookup over a [`NameDayTable`].
///
/// The reverse index is built once at construction and maps normalized names
/// to a month/day only, so the same index serves any reference year. When a
/// normalized name appears under several keys the first one in table order is
/// kept.
pub struct NameDayIndex {
    table: NameDayTable,
    by_name: HashMap<String, DateKey>,
}

impl NameDayIndex {
    pub fn new(table: NameDayTable) -> Self {
        Self::with_diagnostics(table, Arc::new(Silent))
    }

    pub fn with_diagnostics(table: NameDayTable, diagnostics: Arc<dyn Diagnostics>) -> Self {
        let mut by_name = HashMap::new();
        for (key, names) in table.iter() {
            for name in names {
                let normalized = normalize_name(name);
                if normalized.is_empty() {
                    continue;
                }
                match by_name.entry(normalized) {
                    Entry::Vacant(slot) => {
                        slot.insert(key);
                    }
                    Entry::Occupied(slot) if *slot.get() != key => {
                        let kept = *slot.get();
                        emit_with(
                            diagnostics.as_ref(),
                            Level::Warn,
                            "name listed under several dates; the first one wins",
                            || {
                                vec![
                                    ("name", name.clone()),
                                    ("kept", kept.to_string()),
                                    ("ignored", key.to_string()),
                                ]
                            },
                        );
                    }
                    Entry::Occupied(_) => {}
                }
            }
        }
        Self { table, by_name }
    }

    pub fn table(&self) -> &NameDayTable {
        &self.table
    }

    pub fn names_for_date(&self, date: CalendarDate) -> &[String] {
        self.table.names(date.key())
    }

    pub fn date_key_for_name(&self, name: &str) -> Option<DateKey> {
        self.by_name.get(&normalize_name(name)).copied()
    }

    /// The name day of `name` in `reference_year`.
    pub fn date_for_name(&self, name: &str, reference_year: i32) -> Option<CalendarDate> {
        self.date_key_for_name(name)?.in_year(reference_year)
    }
}
