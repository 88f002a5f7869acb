//! Error types for timer operations.
//!
//! The `TimerError` enum represents caller misuse of the timer API. Hardware
//! register accesses cannot fail, so there is nothing else to report.

use core::fmt;

/// Timer error type.
///
/// Returned before any state is changed: a rejected call leaves the timer
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// Interval of zero milliseconds (the elapse test would divide by zero)
    ZeroInterval,
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::ZeroInterval => write!(f, "Timer interval must be at least 1 ms"),
        }
    }
}

impl core::error::Error for TimerError {}
