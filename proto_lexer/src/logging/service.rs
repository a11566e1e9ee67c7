//! Logging service and its sinks

use super::codes::Code;
use super::events::LogEvent;
use crate::config::compile_time::logging::LOG_BUFFER_SIZE;
use crate::config::{LogLevel, LoggingPreferences};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Destination for log events
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Filters events by level and hands them to every sink
pub struct LoggingService {
    sinks: Vec<Arc<dyn Logger>>,
    min_level: LogLevel,
}

impl LoggingService {
    pub fn new(min_level: LogLevel) -> Self {
        Self {
            sinks: Vec::new(),
            min_level,
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn Logger>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Service for the given preferences: a stderr sink in text or JSON form,
    /// or no sink at all when console output is disabled.
    pub fn from_preferences(preferences: &LoggingPreferences) -> Self {
        let service = Self::new(preferences.min_log_level);
        if !preferences.enable_console_logging {
            return service;
        }

        let format = if preferences.use_structured_logging {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        service.with_sink(Arc::new(StreamLogger::stderr(format)))
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level && !self.sinks.is_empty()
    }

    pub fn log_event(&self, event: LogEvent) {
        if !self.should_log(event.level) {
            return;
        }
        for sink in &self.sinks {
            sink.log(&event);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// [`LogEvent::format`]
    Text,
    /// [`LogEvent::format_json`], one object per line
    Json,
}

/// Writes one line per event to a byte stream
pub struct StreamLogger {
    target: Mutex<Box<dyn Write + Send>>,
    format: OutputFormat,
}

impl StreamLogger {
    pub fn new(target: Box<dyn Write + Send>, format: OutputFormat) -> Self {
        Self {
            target: Mutex::new(target),
            format,
        }
    }

    pub fn stderr(format: OutputFormat) -> Self {
        Self::new(Box::new(io::stderr()), format)
    }

    fn render(&self, event: &LogEvent) -> String {
        match self.format {
            OutputFormat::Text => event.format(),
            OutputFormat::Json => event.format_json().unwrap_or_else(|_| event.format()),
        }
    }
}

impl Logger for StreamLogger {
    fn log(&self, event: &LogEvent) {
        let line = self.render(event);
        let mut target = self.target.lock().unwrap_or_else(PoisonError::into_inner);
        // A sink that cannot be written to drops the event
        let _ = writeln!(target, "{}", line);
    }
}

/// Keeps the most recent events in memory, up to the compile-time buffer size
#[derive(Default)]
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn events(&self) -> MutexGuard<'_, Vec<LogEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_events(&self) -> Vec<LogEvent> {
        self.events().clone()
    }

    pub fn get_events_with_code(&self, code: Code) -> Vec<LogEvent> {
        self.events()
            .iter()
            .filter(|event| event.code == code)
            .cloned()
            .collect()
    }

    pub fn event_count(&self) -> usize {
        self.events().len()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        let mut events = self.events();
        if events.len() >= LOG_BUFFER_SIZE {
            let excess = events.len() + 1 - LOG_BUFFER_SIZE;
            events.drain(..excess);
        }
        events.push(event.clone());
    }
}

/// Service capturing every level into memory
pub fn create_capturing_service() -> (LoggingService, Arc<MemoryLogger>) {
    let memory = Arc::new(MemoryLogger::new());
    let service = LoggingService::new(LogLevel::Debug).with_sink(memory.clone());
    (service, memory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    /// Cloneable in-memory byte sink
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn event(level: LogLevel, code: Code) -> LogEvent {
        LogEvent::new(level, code, "message")
    }

    #[test]
    fn test_level_filtering() {
        let memory = Arc::new(MemoryLogger::new());
        let service = LoggingService::new(LogLevel::Warning).with_sink(memory.clone());

        service.log_event(event(LogLevel::Debug, codes::DEBUG_TRACE));
        service.log_event(event(LogLevel::Info, codes::success::TOKENIZATION_COMPLETE));
        service.log_event(event(LogLevel::Warning, codes::lexical::UNTERMINATED_STRING));
        service.log_event(event(LogLevel::Error, codes::syntax::UNEXPECTED_TOKEN));

        assert_eq!(memory.event_count(), 2);
        assert!(!service.should_log(LogLevel::Info));
    }

    #[test]
    fn test_events_reach_every_sink() {
        let first = Arc::new(MemoryLogger::new());
        let second = Arc::new(MemoryLogger::new());
        let service = LoggingService::new(LogLevel::Info)
            .with_sink(first.clone())
            .with_sink(second.clone());

        service.log_event(event(LogLevel::Error, codes::syntax::INVALID_INTEGER));

        assert_eq!(first.get_events_with_code(codes::syntax::INVALID_INTEGER).len(), 1);
        assert_eq!(second.event_count(), 1);
    }

    #[test]
    fn test_memory_logger_keeps_newest_events() {
        let memory = MemoryLogger::new();
        for _ in 0..LOG_BUFFER_SIZE {
            memory.log(&event(LogLevel::Info, codes::success::TOKENIZATION_COMPLETE));
        }
        memory.log(&event(LogLevel::Error, codes::syntax::UNEXPECTED_TOKEN));

        let events = memory.get_events();
        assert_eq!(events.len(), LOG_BUFFER_SIZE);
        assert_eq!(events.last().map(|e| e.code), Some(codes::syntax::UNEXPECTED_TOKEN));
    }

    #[test]
    fn test_stream_logger_text_lines() {
        let buffer = SharedBuffer::default();
        let logger = StreamLogger::new(Box::new(buffer.clone()), OutputFormat::Text);

        logger.log(&event(LogLevel::Error, codes::syntax::UNEXPECTED_TOKEN));
        logger.log(&event(LogLevel::Info, codes::success::RECOVERY_SYNCHRONIZED));

        assert_eq!(
            buffer.contents(),
            "[ERROR] E050 - message\n[INFO] I045 - message\n"
        );
    }

    #[test]
    fn test_stream_logger_json_lines() {
        let buffer = SharedBuffer::default();
        let logger = StreamLogger::new(Box::new(buffer.clone()), OutputFormat::Json);

        logger.log(&event(LogLevel::Warning, codes::lexical::UNTERMINATED_STRING));

        let contents = buffer.contents();
        let json: serde_json::Value = serde_json::from_str(contents.trim_end()).unwrap();
        assert_eq!(json["code"], "E021");
        assert_eq!(json["level"], "warning");
    }

    #[test]
    fn test_service_from_preferences() {
        let mut preferences = LoggingPreferences {
            use_structured_logging: false,
            enable_console_logging: false,
            min_log_level: LogLevel::Warning,
        };

        let silent = LoggingService::from_preferences(&preferences);
        assert_eq!(silent.sink_count(), 0);
        assert!(!silent.should_log(LogLevel::Error));

        preferences.enable_console_logging = true;
        let console = LoggingService::from_preferences(&preferences);
        assert_eq!(console.sink_count(), 1);
        assert_eq!(console.min_level(), LogLevel::Warning);
        assert!(console.should_log(LogLevel::Error));
    }
}
