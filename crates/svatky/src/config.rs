use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::diagnostics::{Diagnostics, JsonLines, Level, Silent};
use crate::localization::TemplateOverrides;
use crate::CelebrationError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SvatkyConfig {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_include_emojis")]
    pub include_emojis: bool,
    #[serde(default)]
    pub log_level: Option<Level>,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub templates: TemplateOverrides,
}

/// Table locations; the bundled Czech tables are used for any left unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DataConfig {
    #[serde(default)]
    pub holidays: Option<PathBuf>,
    #[serde(default)]
    pub name_days: Option<PathBuf>,
}

impl Default for SvatkyConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            include_emojis: default_include_emojis(),
            log_level: None,
            data: DataConfig::default(),
            templates: TemplateOverrides::default(),
        }
    }
}

fn default_locale() -> String {
    "cs".to_string()
}

fn default_include_emojis() -> bool {
    true
}

impl SvatkyConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, CelebrationError> {
        toml::from_str(text)
            .map_err(|err| CelebrationError::Config(format!("failed to parse config: {err}")))
    }

    pub fn read(path: &Path) -> Result<Self, CelebrationError> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|err| {
            CelebrationError::Config(format!("failed to parse {}: {err}", path.display()))
        })
    }

    pub fn diagnostics(&self) -> Arc<dyn Diagnostics> {
        match self.log_level {
            Some(level) => Arc::new(JsonLines::new(level)),
            None => Arc::new(Silent),
        }
    }
}

/// Resolves a configured data path against the directory of the config file.
pub(crate) fn resolve_data_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = SvatkyConfig::from_toml_str("").expect("config");
        assert_eq!(config, SvatkyConfig::default());
        assert_eq!(config.locale, "cs");
        assert!(config.include_emojis);
        assert!(config.templates.is_empty());
    }

    #[test]
    fn parses_all_sections() {
        let config = SvatkyConfig::from_toml_str(
            r#"
locale = "en"
include_emojis = false
log_level = "debug"

[data]
holidays = "tables/holidays.json"
name_days = "/srv/names.json"

[templates]
holiday = "Holiday: {holiday}"
"#,
        )
        .expect("config");
        assert_eq!(config.locale, "en");
        assert!(!config.include_emojis);
        assert_eq!(config.log_level, Some(Level::Debug));
        assert_eq!(
            config.data.holidays.as_deref(),
            Some(Path::new("tables/holidays.json"))
        );
        assert_eq!(config.templates.holiday.as_deref(), Some("Holiday: {holiday}"));
        assert_eq!(config.templates.name_day, None);
        assert!(config.diagnostics().enabled(Level::Debug));
        assert!(!config.diagnostics().enabled(Level::Trace));
    }

    #[test]
    fn diagnostics_are_silent_without_log_level() {
        let config = SvatkyConfig::default();
        assert!(!config.diagnostics().enabled(Level::Warn));
    }

    #[test]
    fn rejects_bad_values() {
        let err = SvatkyConfig::from_toml_str("log_level = \"loud\"").unwrap_err();
        assert!(matches!(err, CelebrationError::Config(_)));
        assert!(SvatkyConfig::from_toml_str("include_emojis = \"yes\"").is_err());
    }

    #[test]
    fn relative_data_paths_follow_the_config_file() {
        let base = Path::new("/etc/svatky");
        assert_eq!(
            resolve_data_path(base, Path::new("names.json")),
            PathBuf::from("/etc/svatky/names.json")
        );
        assert_eq!(
            resolve_data_path(base, Path::new("/data/names.json")),
            PathBuf::from("/data/names.json")
        );
    }
}
