//! Structured console logging with box-drawing layout.
//!
//! The calculation core never logs; this facade is used by the binary and
//! the configuration loader to report what was computed and why. Output can
//! be switched off globally, which keeps tests and scripted runs quiet.

use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Width of the label column used by [`Log::log_field`].
const FIELD_LABEL_WIDTH: usize = 22;

/// Log level enumeration for categorizing message importance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Log,  // Debug and operational detail
    Warn, // Non-fatal issues such as an ignored geo.toml
    Err,  // Failures reported before exiting
    Info, // Status updates
}

impl LogLevel {
    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Log => "[LOG]",
            LogLevel::Warn => "[WARN]",
            LogLevel::Err => "[ERR]",
            LogLevel::Info => "[INFO]",
        }
    }
}

/// Main logging interface providing structured output formatting.
pub struct Log;

impl Log {
    /// Enable or disable all output.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Print a message with its level prefix.
    pub fn log(level: LogLevel, message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("{} {}", level.prefix(), message);
    }

    pub fn log_error(message: &str) {
        Self::log(LogLevel::Err, message);
    }

    pub fn log_warning(message: &str) {
        Self::log(LogLevel::Warn, message);
    }

    pub fn log_info(message: &str) {
        Self::log(LogLevel::Info, message);
    }

    pub fn log_debug(message: &str) {
        Self::log(LogLevel::Log, message);
    }

    // ═══ Visual Formatting Functions ═══

    /// Log a message on the main branch.
    pub fn log_decorated(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┣ {}", message);
    }

    /// Log a detail line under the current branch.
    pub fn log_indented(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┃   {}", message);
    }

    /// Log a right-aligned `label: value` detail line.
    pub fn log_field(label: &str, value: &str) {
        Self::log_indented(&format_field(label, value));
    }

    pub fn log_pipe() {
        if !Self::is_enabled() {
            return;
        }
        println!("┃");
    }

    /// Open a new block separated from the previous one.
    pub fn log_block_start(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┃");
        println!("┣ {}", message);
    }

    /// Print the application header.
    pub fn log_version() {
        if !Self::is_enabled() {
            return;
        }
        println!("┏ sunclock v{} ━━╸", env!("CARGO_PKG_VERSION"));
        println!("┃");
    }

    /// Close the visual structure.
    pub fn log_end() {
        if !Self::is_enabled() {
            return;
        }
        println!("╹");
    }
}

fn format_field(label: &str, value: &str) -> String {
    format!("{:>width$}: {}", label, value, width = FIELD_LABEL_WIDTH)
}
