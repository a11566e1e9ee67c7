//! Global logging for the proto lexer
//!
//! Events carry a registered [`Code`], an optional [`SourceLocation`] and
//! free-form context. Nothing is emitted until a global service is installed,
//! so library callers that never install one pay only for the `OnceLock` check.

pub mod codes;
pub mod events;
pub mod macros;
pub mod service;

use crate::config::LoggingPreferences;
use crate::utils::SourceLocation;
use std::fmt;
use std::sync::{Arc, OnceLock};

pub use crate::config::LogLevel;
pub use codes::Code;
pub use events::LogEvent;
pub use service::{Logger, LoggingService, MemoryLogger, OutputFormat, StreamLogger};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Install a service built from `preferences` as the global logger
pub fn init_global_logging(preferences: &LoggingPreferences) -> Result<(), String> {
    let service = Arc::new(LoggingService::from_preferences(preferences));
    init_global_logging_with_service(service.clone())?;

    service.log_event(LogEvent::new(
        LogLevel::Info,
        codes::success::LOGGING_INITIALIZED,
        "Global logging system initialized",
    ));
    Ok(())
}

/// Install a caller-built service as the global logger
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Build and dispatch one event; used by the logging macros.
///
/// Context values are only formatted when the global service accepts `level`.
pub fn emit(
    level: LogLevel,
    code: Code,
    message: &str,
    location: Option<SourceLocation>,
    context: &[(&str, &dyn fmt::Display)],
) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };
    if !logger.should_log(level) {
        return;
    }

    let mut event = LogEvent::new(level, code, message);
    for &(key, value) in context {
        event = event.with_context(key, value);
    }
    if let Some(location) = location {
        event = event.with_location(location);
    }
    logger.log_event(event);
}

/// Memory sink installed as the global logger for this crate's unit tests
#[cfg(test)]
pub(crate) fn captured_events() -> Arc<MemoryLogger> {
    static CAPTURE: OnceLock<Arc<MemoryLogger>> = OnceLock::new();

    CAPTURE
        .get_or_init(|| {
            let (service, memory) = service::create_capturing_service();
            assert!(
                init_global_logging_with_service(Arc::new(service)).is_ok(),
                "global logger installed outside captured_events"
            );
            memory
        })
        .clone()
}
