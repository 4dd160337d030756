//! Console progress log for the extraction pipeline.
//!
//! Each stage reports what it did through the `log_*` helpers. Entries are
//! printed with a level prefix (errors to stderr, the rest to stdout) and
//! mirrored as `debug` tracing events, so they only reach the diagnostic
//! output when `RUST_LOG` asks for it.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};

/// Log level for console display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth, three spaces per level
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Render the entry the way it appears on the console.
    pub fn render(&self) -> String {
        let prefix = match self.level {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        };
        let indent = "   ".repeat(self.indent as usize);
        format!("{}{} {}", indent, prefix, self.message)
    }
}

/// Global console
pub static CONSOLE: Lazy<Console> = Lazy::new(Console::new);

/// Prints log entries unless silenced
pub struct Console {
    quiet: AtomicBool,
}

impl Console {
    pub fn new() -> Self {
        Self { quiet: AtomicBool::new(false) }
    }

    /// Silence (or restore) console output. Tracing events are still emitted.
    pub fn set_quiet(&self, quiet: bool) {
        self.quiet.store(quiet, Ordering::Relaxed);
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet.load(Ordering::Relaxed)
    }

    /// Errors are always shown; everything else only when not quiet.
    pub fn should_print(&self, entry: &LogEntry) -> bool {
        entry.level == LogLevel::Error || !self.is_quiet()
    }

    /// Print an entry. Returns whether a console line was written.
    pub fn log(&self, entry: LogEntry) -> bool {
        tracing::debug!(level = ?entry.level, "{}", entry.message);

        if !self.should_print(&entry) {
            return false;
        }

        match entry.level {
            LogLevel::Error => eprintln!("{}", entry.render()),
            _ => println!("{}", entry.render()),
        }
        true
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

pub fn log_info(msg: impl Into<String>) {
    CONSOLE.log(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    CONSOLE.log(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    CONSOLE.log(LogEntry::warning(msg));
}

pub fn log_error(msg: impl Into<String>) {
    CONSOLE.log(LogEntry::error(msg));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    CONSOLE.log(LogEntry::info(msg).with_indent(indent));
}
