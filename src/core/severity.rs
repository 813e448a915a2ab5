//! Dispatch kinds and their post-log outcome

use super::log_level::LogLevel;
use std::fmt;

/// What the caller must do once an event has been written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutcome {
    Continue,
    Exit(i32),
}

impl LogOutcome {
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            LogOutcome::Continue => None,
            LogOutcome::Exit(code) => Some(*code),
        }
    }
}

/// The seven convenience entry points of a logger
///
/// `Alert` and `Emergency` are written at [`LogLevel::Fatal`] like `Fatal`
/// and differ only in their exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
    Alert,
    Emergency,
}

impl Severity {
    /// Level the event is written at
    pub fn level(&self) -> LogLevel {
        match self {
            Severity::Debug => LogLevel::Debug,
            Severity::Info => LogLevel::Info,
            Severity::Warning => LogLevel::Warning,
            Severity::Error => LogLevel::Error,
            Severity::Fatal | Severity::Alert | Severity::Emergency => LogLevel::Fatal,
        }
    }

    pub fn outcome(&self) -> LogOutcome {
        match self {
            Severity::Fatal => LogOutcome::Exit(1),
            Severity::Alert => LogOutcome::Exit(2),
            Severity::Emergency => LogOutcome::Exit(3),
            _ => LogOutcome::Continue,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
            Severity::Alert => "alert",
            Severity::Emergency => "emergency",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
