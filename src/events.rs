/*!
 * Lifecycle Events
 *
 * Strongly-typed events emitted when resources are acquired and released
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Event severity for filtering and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

/// Which trigger performed the release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleasePath {
    /// The owner called `release()` (directly or via scoped acquisition)
    Explicit,
    /// The handle was dropped while still live
    Fallback,
}

impl ReleasePath {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleasePath::Explicit => "explicit",
            ReleasePath::Fallback => "fallback",
        }
    }
}

impl fmt::Display for ReleasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event payload - one variant per lifecycle transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    ResourceAcquired {
        label: String,
    },
    ResourceReleased {
        label: String,
        via: ReleasePath,
        lifetime_micros: u64,
    },
}

impl Payload {
    /// Label of the resource this payload concerns
    pub fn label(&self) -> &str {
        match self {
            Payload::ResourceAcquired { label } => label,
            Payload::ResourceReleased { label, .. } => label,
        }
    }
}

/// A lifecycle notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Wall-clock timestamp (nanoseconds since the Unix epoch)
    pub timestamp_ns: u64,
    /// Event severity
    pub severity: Severity,
    /// Event payload
    pub payload: Payload,
}

impl Event {
    pub fn new(severity: Severity, payload: Payload) -> Self {
        let timestamp_ns = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();

        Self {
            timestamp_ns,
            severity,
            payload,
        }
    }

    /// Label of the resource this event concerns
    pub fn label(&self) -> &str {
        self.payload.label()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Payload::ResourceAcquired { label } => {
                write!(f, "The {} resource has been successfully created", label)
            }
            Payload::ResourceReleased {
                label,
                via,
                lifetime_micros,
            } => {
                write!(
                    f,
                    "The {} has been released ({} release after {}us)",
                    label, via, lifetime_micros
                )
            }
        }
    }
}
