//! Structured terminal output with visual formatting.
//!
//! Every user-facing line bracelet prints goes through [`Log`]. Leveled messages
//! carry a bracketed prefix, while the structural helpers draw the box-drawing
//! frame (`┏`, `┣`, `┃`, `╹`) that groups a run's output into one block.
//!
//! Warnings and errors are written to stderr so that a redirected stdout only
//! contains regular progress output. Output can be switched off globally, which
//! the tests use to keep their output clean.

use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Log level enumeration for categorizing message importance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Log,  // Diagnostic output, shown with --debug
    Warn, // Non-fatal issues
    Err,  // Failures that end the run
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

    fn to_stderr(self) -> bool {
        matches!(self, LogLevel::Warn | LogLevel::Err)
    }
}

/// Main logging interface providing structured output formatting.
pub struct Log;

impl Log {
    /// Enable or disable all output.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if output is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Format a leveled line without printing it.
    pub fn format_line(level: LogLevel, message: &str) -> String {
        format!("{} {}", level.prefix(), message)
    }

    /// Main log function with level-based prefixes.
    pub fn log(level: LogLevel, message: &str) {
        if !Self::is_enabled() {
            return;
        }

        let line = Self::format_line(level, message);
        if level.to_stderr() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    // ═══ Convenience Methods for Common Log Levels ═══

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

    /// Print a raw line inside the frame, honoring the enabled switch.
    fn frame(line: &str) {
        if Self::is_enabled() {
            println!("{}", line);
        }
    }

    /// Log a decorated message with a branching indicator.
    pub fn log_decorated(message: &str) {
        Self::frame(&format!("┣ {}", message));
    }

    /// Log an indented message for sub-items or details.
    pub fn log_indented(message: &str) {
        Self::frame(&format!("┃   {}", message));
    }

    /// Log a bare pipe used as vertical spacing.
    pub fn log_pipe() {
        Self::frame("┃");
    }

    /// Log a block start: a spacer pipe followed by a decorated message.
    pub fn log_block_start(message: &str) {
        Self::log_pipe();
        Self::log_decorated(message);
    }

    /// Log the application header that opens the frame.
    pub fn log_version() {
        Self::frame(&format!("┏ bracelet v{} ━━╸", env!("CARGO_PKG_VERSION")));
        Self::log_pipe();
    }

    /// Log the marker that closes the frame.
    pub fn log_end() {
        Self::frame("╹");
    }
}
