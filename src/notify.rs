// Fire-and-forget user-facing notifications, mirroring the admin panel's
// toast sink. The dispatcher funnels every success and error case through
// this trait so the CLI and tests can observe them the same way.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Error => "error",
        };
        f.write_str(s)
    }
}

pub trait Notifier {
    fn notify(&mut self, message: &str, level: Level);
}

/// Prints notifications to the terminal and mirrors them into the log.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, message: &str, level: Level) {
        match level {
            Level::Error => {
                tracing::error!("{message}");
                eprintln!("error: {message}");
            }
            Level::Warning => {
                tracing::warn!("{message}");
                eprintln!("warning: {message}");
            }
            Level::Info | Level::Success => {
                tracing::info!("{message}");
                println!("{message}");
            }
        }
    }
}
