//! Log events

use super::codes::Code;
use crate::config::compile_time::logging::MAX_LOG_MESSAGE_LENGTH;
use crate::config::LogLevel;
use crate::utils::SourceLocation;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub code: Code,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub context: BTreeMap<String, String>,
}

impl LogEvent {
    /// New event stamped with the current time. Messages longer than the
    /// compile-time limit are cut short.
    pub fn new(level: LogLevel, code: Code, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            code,
            message: truncate_message(message),
            location: None,
            context: BTreeMap::new(),
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_context(mut self, key: &str, value: impl ToString) -> Self {
        self.context.insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == LogLevel::Error
    }

    pub fn is_warning(&self) -> bool {
        self.level == LogLevel::Warning
    }

    /// `[LEVEL] CODE - message (key=value, ...) at file:line:column`
    pub fn format(&self) -> String {
        let mut line = format!("[{}] {} - {}", self.level.as_str(), self.code, self.message);

        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            line.push_str(&format!(" ({})", pairs.join(", ")));
        }
        if let Some(location) = &self.location {
            line.push_str(&format!(" at {}", location));
        }
        line
    }

    /// One JSON object per event, for structured output
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn truncate_message(message: &str) -> String {
    if message.len() <= MAX_LOG_MESSAGE_LENGTH {
        return message.to_string();
    }

    let mut end = MAX_LOG_MESSAGE_LENGTH;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &message[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;
    use crate::utils::Position;
    use std::sync::Arc;

    fn location() -> SourceLocation {
        SourceLocation::new(
            Arc::from("demo.proto"),
            Position::new(7, 12),
            Arc::from("  bool ok = maybe;"),
        )
    }

    #[test]
    fn test_text_format() {
        let event = LogEvent::new(LogLevel::Error, codes::syntax::UNEXPECTED_TOKEN, "Expected ';'")
            .with_context("fatal", false)
            .with_location(location());

        assert!(event.is_error());
        assert_eq!(
            event.format(),
            "[ERROR] E050 - Expected ';' (fatal=false) at demo.proto:7:12"
        );
    }

    #[test]
    fn test_text_format_without_extras() {
        let event = LogEvent::new(LogLevel::Info, codes::success::TOKENIZATION_COMPLETE, "done");
        assert_eq!(event.format(), "[INFO] I020 - done");
    }

    #[test]
    fn test_json_format() {
        let event = LogEvent::new(LogLevel::Warning, codes::lexical::UNTERMINATED_STRING, "open")
            .with_location(location())
            .with_context("line", 7);

        let json: serde_json::Value = serde_json::from_str(&event.format_json().unwrap()).unwrap();
        assert_eq!(json["level"], "warning");
        assert_eq!(json["code"], "E021");
        assert_eq!(json["location"]["position"]["line"], 7);
        assert_eq!(json["location"]["file"], "demo.proto");
        assert_eq!(json["context"]["line"], "7");
        assert!(json["timestamp"].as_str().is_some());
    }

    #[test]
    fn test_json_omits_empty_fields() {
        let event = LogEvent::new(LogLevel::Debug, codes::DEBUG_TRACE, "trace");

        let json: serde_json::Value = serde_json::from_str(&event.format_json().unwrap()).unwrap();
        assert!(json.get("location").is_none());
        assert!(json.get("context").is_none());
    }

    #[test]
    fn test_long_messages_are_truncated() {
        let message = "é".repeat(MAX_LOG_MESSAGE_LENGTH);
        let event = LogEvent::new(LogLevel::Info, codes::DEBUG_TRACE, &message);

        assert!(event.message.len() <= MAX_LOG_MESSAGE_LENGTH + 3);
        assert!(event.message.ends_with("..."));
    }
}
