//! Structured JSON logger
//!
//! - One log line = one event
//! - Keys in fixed order: `event`, `severity`, then fields sorted by key
//! - Synchronous, no buffering
//! - Written to stderr; stdout is reserved for command responses

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use super::events::Event;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Per-chunk detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Command failures
    Error = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRACE" => Ok(Severity::Trace),
            "INFO" => Ok(Severity::Info),
            "WARN" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            other => Err(format!(
                "Invalid log level '{}'. Must be one of TRACE, INFO, WARN, ERROR.",
                other
            )),
        }
    }
}

/// Logger that drops events below a minimum severity
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    min_severity: Severity,
}

impl Logger {
    pub fn new(min_severity: Severity) -> Self {
        Self { min_severity }
    }

    /// Returns true if events at `severity` are emitted
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.min_severity
    }

    /// Log an event to stderr
    pub fn log(&self, severity: Severity, event: Event, fields: &[(&str, &str)]) {
        if self.enabled(severity) {
            write_line(severity, event, fields, &mut io::stderr());
        }
    }

    pub fn trace(&self, event: Event, fields: &[(&str, &str)]) {
        self.log(Severity::Trace, event, fields);
    }

    pub fn info(&self, event: Event, fields: &[(&str, &str)]) {
        self.log(Severity::Info, event, fields);
    }

    pub fn warn(&self, event: Event, fields: &[(&str, &str)]) {
        self.log(Severity::Warn, event, fields);
    }

    pub fn error(&self, event: Event, fields: &[(&str, &str)]) {
        self.log(Severity::Error, event, fields);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Severity::Info)
    }
}

/// Render one log line
pub fn render_line(severity: Severity, event: Event, fields: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(128);

    output.push_str("{\"event\":");
    push_json_string(&mut output, event.as_str());
    output.push_str(",\"severity\":");
    push_json_string(&mut output, severity.as_str());

    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    for (key, value) in sorted {
        output.push(',');
        push_json_string(&mut output, key);
        output.push(':');
        push_json_string(&mut output, value);
    }

    output.push_str("}\n");
    output
}

fn write_line<W: Write>(severity: Severity, event: Event, fields: &[(&str, &str)], writer: &mut W) {
    let line = render_line(severity, event, fields);
    // Logging must never fail a command
    let _ = writer.write_all(line.as_bytes());
    let _ = writer.flush();
}

fn push_json_string(output: &mut String, s: &str) {
    match serde_json::to_string(s) {
        Ok(quoted) => output.push_str(&quoted),
        Err(_) => output.push_str("\"\""),
    }
}
