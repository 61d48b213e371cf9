//! Structured diagnostic events.
//!
//! The dispatch pipeline reports every validation failure and every
//! successful dispatch through a [`Logger`]. Sinks must not fail or block.

use std::fmt;

use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

/// Severity of a [`LogEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Detailed diagnostics.
    Debug,
    /// Normal operation (one per dispatched call).
    Info,
    /// Unexpected but recoverable.
    Warn,
    /// A call failed.
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        })
    }
}

/// One structured event: level, fixed message and free-form context.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    /// Severity.
    pub level: LogLevel,
    /// Short, stable message (e.g. `"Service parameter missing"`).
    pub message: &'static str,
    /// Structured context (service, resource, method, parameter...).
    pub context: Map<String, Value>,
}

impl LogEvent {
    /// Create an event with empty context.
    #[must_use]
    pub fn new(level: LogLevel, message: &'static str) -> Self {
        Self {
            level,
            message,
            context: Map::new(),
        }
    }

    /// Add a context entry.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.context.insert(key.to_string(), value.into());
        self
    }
}

/// Sink for [`LogEvent`]s.
pub trait Logger: Send + Sync {
    /// Record an event. Must not panic or block.
    fn log(&self, event: LogEvent);
}

/// Forwards events to `tracing`, context rendered as a JSON field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, event: LogEvent) {
        let context = Value::Object(event.context);
        match event.level {
            LogLevel::Debug => debug!(target: "livere", %context, "{}", event.message),
            LogLevel::Info => info!(target: "livere", %context, "{}", event.message),
            LogLevel::Warn => warn!(target: "livere", %context, "{}", event.message),
            LogLevel::Error => error!(target: "livere", %context, "{}", event.message),
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _event: LogEvent) {}
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn log_event_context() {
        let event = LogEvent::new(LogLevel::Error, "Service parameter missing")
            .with("service", "count")
            .with("parameter", "refer");

        assert_eq!(event.level, LogLevel::Error);
        assert_eq!(event.message, "Service parameter missing");
        assert_eq!(
            Value::Object(event.context),
            json!({"service": "count", "parameter": "refer"})
        );
    }

    #[test]
    fn log_level_order_and_display() {
        assert!(LogLevel::Debug < LogLevel::Error);
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn builtin_loggers_accept_events() {
        TracingLogger.log(LogEvent::new(LogLevel::Info, "Service call").with("method", "get"));
        NullLogger.log(LogEvent::new(LogLevel::Error, "ignored"));
    }
}
