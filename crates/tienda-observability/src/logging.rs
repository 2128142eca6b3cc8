//! Structured logging with component context.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Component that emitted the entry.
    pub component: String,
    /// Position of this entry in the logger's output.
    pub seq: u64,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {}: {}", self.level, self.component, self.message);

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }

    /// Get a field value.
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    Json,
    /// Human-readable format (for the browser console and development).
    #[default]
    Human,
}

/// In-memory log capture.
#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    entries: Rc<RefCell<Vec<LogEntry>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of captured entries.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    /// Captured entries at `level`.
    pub fn at_level(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.level == level)
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    fn push(&self, entry: LogEntry) {
        self.entries.borrow_mut().push(entry);
    }
}

/// Callback receiving each entry and its formatted line.
pub type LogCallback = Rc<dyn Fn(&LogEntry, &str)>;

/// Where log lines go.
#[derive(Clone, Default)]
pub enum LogSink {
    /// Standard error.
    #[default]
    Stderr,
    /// Captured in memory.
    Memory(MemoryLog),
    /// Handed to a callback (e.g. the browser console).
    Callback(LogCallback),
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stderr => write!(f, "Stderr"),
            Self::Memory(log) => f.debug_tuple("Memory").field(log).finish(),
            Self::Callback(_) => write!(f, "Callback"),
        }
    }
}

/// Structured logger for one component.
///
/// Clones share the sequence counter, so entries from every clone are
/// numbered in emission order.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    component: String,
    min_level: LogLevel,
    format: LogFormat,
    sink: LogSink,
    seq: Rc<Cell<u64>>,
}

impl StructuredLogger {
    /// Create a new logger for `component`.
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            min_level: LogLevel::Info,
            format: LogFormat::Human,
            sink: LogSink::Stderr,
            seq: Rc::new(Cell::new(0)),
        }
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set output sink.
    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    /// The component name.
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Check whether `level` passes the minimum level.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Log at trace level.
    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message, BTreeMap::new());
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    /// Log with additional fields.
    pub fn log_with_fields(
        &self,
        level: LogLevel,
        message: &str,
        fields: BTreeMap<String, serde_json::Value>,
    ) {
        self.log(level, message, fields);
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if !self.enabled(level) {
            return;
        }

        let seq = self.seq.get();
        self.seq.set(seq + 1);

        let entry = LogEntry {
            level,
            message: message.to_string(),
            component: self.component.clone(),
            seq,
            fields,
        };

        match &self.sink {
            LogSink::Stderr => eprintln!("{}", self.render(&entry)),
            LogSink::Memory(log) => log.push(entry),
            LogSink::Callback(callback) => callback(&entry, &self.render(&entry)),
        }
    }

    fn render(&self, entry: &LogEntry) -> String {
        match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        }
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building an error log entry.
    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_logger() -> (StructuredLogger, MemoryLog) {
        let log = MemoryLog::new();
        let logger = StructuredLogger::new("storefront").with_sink(LogSink::Memory(log.clone()));
        (logger, log)
    }

    #[test]
    fn test_min_level_filters() {
        let (logger, log) = memory_logger();
        logger.debug("hidden");
        logger.info("shown");
        logger.error("shown too");

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "shown");
        assert_eq!(log.at_level(LogLevel::Error).len(), 1);
    }

    #[test]
    fn test_builder_fields() {
        let (logger, log) = memory_logger();
        logger
            .error_builder("Product load failed")
            .field("error", "HTTP 500: Internal Server Error")
            .field_i64("status", 500)
            .field_bool("retry", false)
            .emit();

        let entry = &log.entries()[0];
        assert_eq!(entry.level, LogLevel::Error);
        assert_eq!(entry.component, "storefront");
        assert_eq!(entry.field("status"), Some(&serde_json::json!(500)));
        assert_eq!(entry.field("retry"), Some(&serde_json::json!(false)));
    }

    #[test]
    fn test_sequence_shared_between_clones() {
        let (logger, log) = memory_logger();
        let other = logger.clone();
        logger.info("one");
        other.info("two");
        logger.info("three");

        let seqs: Vec<u64> = log.entries().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
    }

    #[test]
    fn test_human_format() {
        let (logger, log) = memory_logger();
        logger.info_builder("Products loaded").field_i64("count", 3).emit();
        assert_eq!(
            log.entries()[0].to_human(),
            "[INFO] storefront: Products loaded | count=3"
        );
    }

    #[test]
    fn test_json_format_flattens_fields() {
        let (logger, log) = memory_logger();
        logger.warn_builder("Cart add rejected").field_i64("product_id", 4).emit();

        let json: serde_json::Value = serde_json::from_str(&log.entries()[0].to_json()).unwrap();
        assert_eq!(json["level"], "warn");
        assert_eq!(json["product_id"], 4);
        assert_eq!(json["component"], "storefront");
    }

    #[test]
    fn test_callback_sink_receives_formatted_line() {
        let lines = Rc::new(RefCell::new(Vec::new()));
        let captured = lines.clone();
        let logger = StructuredLogger::new("web")
            .with_format(LogFormat::Human)
            .with_sink(LogSink::Callback(Rc::new(move |_entry: &LogEntry, line: &str| {
                captured.borrow_mut().push(line.to_string());
            })));

        logger.error("boom");
        assert_eq!(*lines.borrow(), vec!["[ERROR] web: boom".to_string()]);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
