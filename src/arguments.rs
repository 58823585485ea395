/// Centralized argument handling for wishtracker
///
/// Consolidates command-line argument parsing and debug flag checking so the
/// rest of the codebase never touches `env::args()` directly.
///
/// Features:
/// - Thread-safe CMD_ARGS storage (overridable from tests)
/// - Debug flag checking functions per module (--debug-<module>)
/// - Flag value lookup (--port 8080 style)
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
/// Returns a vector clone to avoid holding the mutex lock
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => env::args().collect(),
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
/// Returns None if the flag is not found or has no value
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    for (i, arg) in args.iter().enumerate() {
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

// =============================================================================
// DEBUG FLAG CHECKING FUNCTIONS
// =============================================================================

/// Check if fetcher debug logging is enabled (--debug-fetcher)
pub fn is_debug_fetcher_enabled() -> bool {
    has_arg("--debug-fetcher")
}

/// Check if webserver debug logging is enabled (--debug-webserver)
pub fn is_debug_webserver_enabled() -> bool {
    has_arg("--debug-webserver")
}

/// Check if avatar resolver debug logging is enabled (--debug-avatars)
pub fn is_debug_avatars_enabled() -> bool {
    has_arg("--debug-avatars")
}

/// Check if help output was requested
pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

/// Print usage information
pub fn print_help() {
    println!("wishtracker - gacha log crawler and pull statistics server");
    println!();
    println!("USAGE:");
    println!("    wishtracker [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --host <addr>        Bind address (default: 127.0.0.1)");
    println!("    --port <port>        Listen port (default: 8080)");
    println!("    --debug-fetcher      Per-page fetch diagnostics");
    println!("    --debug-webserver    Request handling diagnostics");
    println!("    --debug-avatars      Avatar preload diagnostics");
    println!("    -h, --help           Print this help");
}
