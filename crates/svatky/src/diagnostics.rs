use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
        }
    }
}

/// Sink for observability events raised while resolving and indexing.
///
/// Events are informational only: nothing a sink does can alter the value a
/// lookup returns.
pub trait Diagnostics: Send + Sync {
    fn enabled(&self, _level: Level) -> bool {
        true
    }

    fn emit(&self, level: Level, message: &str, context: &[(&str, String)]);
}

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Diagnostics for Silent {
    fn enabled(&self, _level: Level) -> bool {
        false
    }

    fn emit(&self, _level: Level, _message: &str, _context: &[(&str, String)]) {}
}

/// Writes one JSON object per event; `warn` goes to stderr, the rest to stdout.
#[derive(Debug, Clone, Copy)]
pub struct JsonLines {
    min_level: Level,
}

impl JsonLines {
    pub fn new(min_level: Level) -> Self {
        Self { min_level }
    }

    pub fn render(level: Level, message: &str, context: &[(&str, String)]) -> String {
        let ctx_json: serde_json::Map<String, JsonValue> = context
            .iter()
            .map(|(key, value)| (key.to_string(), JsonValue::String(value.clone())))
            .collect();
        let payload = JsonValue::Object(
            [
                (
                    "level".to_string(),
                    JsonValue::String(level.as_str().to_string()),
                ),
                ("message".to_string(), JsonValue::String(message.to_string())),
                ("context".to_string(), JsonValue::Object(ctx_json)),
            ]
            .into_iter()
            .collect(),
        );
        payload.to_string()
    }
}

impl Diagnostics for JsonLines {
    fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    fn emit(&self, level: Level, message: &str, context: &[(&str, String)]) {
        if !self.enabled(level) {
            return;
        }
        let line = Self::render(level, message, context);
        match level {
            Level::Warn => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    }
}

/// Emits an event, building its context only when the sink wants the level.
pub(crate) fn emit_with<F>(sink: &dyn Diagnostics, level: Level, message: &str, context: F)
where
    F: FnOnce() -> Vec<(&'static str, String)>,
{
    if sink.enabled(level) {
        sink.emit(level, message, &context());
    }
}
