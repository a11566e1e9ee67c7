//! Logging macros over the global logger
//!
//! ```ignore
//! log_error!(code, "message", location = token.location(), "key" => value);
//! log_success!(code, "message", "tokens" => count);
//! log_debug!("message", "file" => name);
//! ```
//!
//! Context values may be any `Display` type. Every macro is a no-op until a
//! global logger is installed.

/// Emit an event at an explicit level; the other macros forward here.
#[macro_export]
macro_rules! log_event {
    ($level:expr, $code:expr, $message:expr, location = $location:expr $(, $key:expr => $value:expr)*) => {
        $crate::logging::emit(
            $level,
            $code,
            $message,
            Some($location),
            &[$(($key, &$value as &dyn ::std::fmt::Display)),*],
        )
    };

    ($level:expr, $code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        $crate::logging::emit(
            $level,
            $code,
            $message,
            None,
            &[$(($key, &$value as &dyn ::std::fmt::Display)),*],
        )
    };
}

#[macro_export]
macro_rules! log_error {
    ($($args:tt)+) => {
        $crate::log_event!($crate::logging::LogLevel::Error, $($args)+)
    };
}

#[macro_export]
macro_rules! log_warning {
    ($($args:tt)+) => {
        $crate::log_event!($crate::logging::LogLevel::Warning, $($args)+)
    };
}

/// Info-level event tagged with a success code
#[macro_export]
macro_rules! log_success {
    ($($args:tt)+) => {
        $crate::log_event!($crate::logging::LogLevel::Info, $($args)+)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($message:expr $(, $key:expr => $value:expr)*) => {
        $crate::log_event!(
            $crate::logging::LogLevel::Debug,
            $crate::logging::codes::DEBUG_TRACE,
            $message
            $(, $key => $value)*
        )
    };
}
