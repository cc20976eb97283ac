//! Logging utilities with colored output.
//!
//! - `log!` prints a message behind a colored `[module]` prefix
//! - `debug!` does the same on stderr, but only with `--verbose`
//! - `warn_block` prints a headline followed by a bullet list
//!
//! # Example
//!
//! ```ignore
//! log!("rss"; "wrote {} items", count);
//! debug!("content"; "skipping {}", path.display());
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log_stderr($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix.
///
/// Errors and warnings go to stderr so that `query` output on stdout
/// stays machine readable.
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    if matches!(module_lower.as_str(), "error" | "warning" | "hint") {
        let prefix = colorize_prefix(module, &module_lower, Stream::Stderr);
        write_stderr(&prefix, message);
        return;
    }

    let prefix = colorize_prefix(module, &module_lower, Stream::Stdout);

    let mut stdout = stdout().lock();
    execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Log to stderr regardless of module, used for verbose diagnostics.
pub fn log_stderr(module: &str, message: &str) {
    let prefix = colorize_prefix(module, &module.to_ascii_lowercase(), Stream::Stderr);
    write_stderr(&prefix, message);
}

fn write_stderr(prefix: &str, message: &str) {
    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Print a headline followed by one `- item` line per entry (stderr).
pub fn warn_block(headline: &str, items: &[String]) {
    log("warning", headline);
    let mut stderr = stderr().lock();
    for item in items {
        writeln!(stderr, "- {item}").ok();
    }
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type.
///
/// Plain text when `stream` is not a color terminal or `--color never`.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str, stream: Stream) -> String {
    let prefix = format!("[{module}]");
    let style = match module_lower {
        "rss" | "atom" => Style::new().bright_green().bold(),
        "error" => Style::new().bright_red().bold(),
        "warning" | "hint" => Style::new().bright_magenta().bold(),
        _ => Style::new().bright_yellow().bold(),
    };
    prefix
        .if_supports_color(stream, |t| t.style(style))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_keeps_module_name() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("rss", "rss", Stream::Stdout), "[rss]");
        assert_eq!(
            colorize_prefix("Config", "config", Stream::Stderr),
            "[Config]"
        );
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
