//! Tagged console logging for wishtracker
//!
//! Colorized output with per-subsystem tags and standard levels
//! (Error/Warning/Info/Debug). Debug messages are gated by the
//! matching --debug-<module> flag from `arguments`.
//!
//! ## Usage
//!
//! ```rust
//! use wishtracker::logger::{self, LogTag};
//!
//! logger::info(LogTag::Fetcher, "pool fetch complete");
//! logger::error(LogTag::Webserver, "bind failed");
//! logger::debug(LogTag::Fetcher, "page 3, end_id=17..."); // only with --debug-fetcher
//! ```

use chrono::Local;
use colored::*;
use std::io::{self, Write};

use crate::arguments;

/// Tag width for aligned output
const TAG_WIDTH: usize = 9;

/// Subsystem tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTag {
    System,
    Fetcher,
    Avatars,
    Webserver,
}

impl LogTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Fetcher => "FETCHER",
            LogTag::Avatars => "AVATARS",
            LogTag::Webserver => "WEB",
        }
    }

    /// Key matched against --debug-<key> command-line flags
    fn debug_key(&self) -> &'static str {
        match self {
            LogTag::System => "system",
            LogTag::Fetcher => "fetcher",
            LogTag::Avatars => "avatars",
            LogTag::Webserver => "webserver",
        }
    }

    fn colored(&self) -> ColoredString {
        let padded = format!("{:<width$}", self.as_str(), width = TAG_WIDTH);
        match self {
            LogTag::System => padded.bright_yellow().bold(),
            LogTag::Fetcher => padded.bright_cyan().bold(),
            LogTag::Avatars => padded.bright_magenta().bold(),
            LogTag::Webserver => padded.bright_white().bold(),
        }
    }
}

/// Log levels ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    fn colored(&self) -> ColoredString {
        match self {
            LogLevel::Error => "ERROR".red().bold(),
            LogLevel::Warning => "WARNING".yellow().bold(),
            LogLevel::Info => "INFO".green(),
            LogLevel::Debug => "DEBUG".purple(),
        }
    }
}

/// Initialize the logger system
///
/// Call once at startup before any logging occurs. Currently only logs the
/// active debug flags so a misspelled flag is visible immediately.
pub fn init() {
    let flags: Vec<String> = arguments::get_cmd_args()
        .into_iter()
        .filter(|a| a.starts_with("--debug-"))
        .collect();
    if !flags.is_empty() {
        info(
            LogTag::System,
            &format!("Debug flags active: {}", flags.join(", ")),
        );
    }
}

fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    // Errors always log; debug requires the matching flag
    match level {
        LogLevel::Debug => arguments::has_arg(&format!("--debug-{}", tag.debug_key())),
        _ => true,
    }
}

fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&tag, level) {
        return;
    }

    let time = Local::now().format("%H:%M:%S").to_string();
    println!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        tag.colored(),
        level.colored(),
        message
    );
    let _ = io::stdout().flush();
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level
pub fn warning(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level
pub fn info(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level (gated by --debug-<module>)
pub fn debug(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Debug, message);
}
