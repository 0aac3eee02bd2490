//! User-visible status messages.

use colored::Colorize;
use std::sync::{Mutex, PoisonError};

/// Channel for save status and visible warnings.
pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    /// A warning about lost data. Shown even when warnings are silenced.
    fn alert(&self, message: &str);
    fn error(&self, message: &str);
}

/// Prints to the terminal: info on stdout, warnings and errors on stderr.
///
/// With `quiet` set only alerts and errors are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier {
    quiet: bool,
}

impl TerminalNotifier {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self {
            quiet,
        }
    }

    /// Whether a message of `level` reaches the terminal.
    #[must_use]
    pub const fn shows(&self, level: NoticeLevel) -> bool {
        !self.quiet || matches!(level, NoticeLevel::Alert | NoticeLevel::Error)
    }

    fn print_warning(&self, level: NoticeLevel, message: &str) {
        if self.shows(level) {
            eprintln!("{}: {}", "warning".yellow().bold(), message);
        }
    }
}

impl Notifier for TerminalNotifier {
    fn info(&self, message: &str) {
        if self.shows(NoticeLevel::Info) {
            println!("{}", message.green());
        }
    }

    fn warn(&self, message: &str) {
        self.print_warning(NoticeLevel::Warn, message);
    }

    fn alert(&self, message: &str) {
        self.print_warning(NoticeLevel::Alert, message);
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message.red());
    }
}

/// Severity of a recorded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
    Alert,
    Error,
}

/// One recorded message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Messages of one level.
    #[must_use]
    pub fn messages(&self, level: NoticeLevel) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|notice| notice.level == level)
            .map(|notice| notice.message)
            .collect()
    }

    fn record(&self, level: NoticeLevel, message: &str) {
        self.notices.lock().unwrap_or_else(PoisonError::into_inner).push(Notice {
            level,
            message: message.to_string(),
        });
    }
}

impl Notifier for RecordingNotifier {
    fn info(&self, message: &str) {
        self.record(NoticeLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(NoticeLevel::Warn, message);
    }

    fn alert(&self, message: &str) {
        self.record(NoticeLevel::Alert, message);
    }

    fn error(&self, message: &str) {
        self.record(NoticeLevel::Error, message);
    }
}

impl<N: Notifier> Notifier for &N {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }

    fn alert(&self, message: &str) {
        (**self).alert(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}
