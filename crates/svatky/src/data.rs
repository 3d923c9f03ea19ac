use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::holidays::HolidayTable;
use crate::namedays::NameDayTable;
use crate::CelebrationError;

pub const CZECH_HOLIDAYS_JSON: &str = include_str!("../data/holidays_cz.json");
pub const CZECH_NAME_DAYS_JSON: &str = include_str!("../data/names_cz.json");

pub fn czech_holidays() -> Result<HolidayTable, CelebrationError> {
    HolidayTable::from_json_str(CZECH_HOLIDAYS_JSON)
}

pub fn czech_name_days() -> Result<NameDayTable, CelebrationError> {
    NameDayTable::from_json_str(CZECH_NAME_DAYS_JSON)
}

pub fn read_holidays(path: &Path) -> Result<HolidayTable, CelebrationError> {
    let text = std::fs::read_to_string(path)?;
    HolidayTable::from_json_str(&text).map_err(|err| with_path(err, path))
}

pub fn read_name_days(path: &Path) -> Result<NameDayTable, CelebrationError> {
    let text = std::fs::read_to_string(path)?;
    NameDayTable::from_json_str(&text).map_err(|err| with_path(err, path))
}

fn with_path(err: CelebrationError, path: &Path) -> CelebrationError {
    match err {
        CelebrationError::Data(msg) => CelebrationError::Data(format!("{}: {msg}", path.display())),
        CelebrationError::InvalidDateKey(key) => {
            CelebrationError::Data(format!("{}: invalid date key `{key}`", path.display()))
        }
        other => other,
    }
}

/// A JSON object decoded into its entries in document order.
///
/// Duplicate keys are kept; consumers decide which occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OrderedEntries<V>(pub Vec<(String, V)>);

impl<'de, V> Deserialize<'de> for OrderedEntries<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V> Visitor<'de> for EntriesVisitor<V>
        where
            V: Deserialize<'de>,
        {
            type Value = OrderedEntries<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}
