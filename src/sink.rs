/*!
 * Notification Sinks
 *
 * Pluggable destinations for lifecycle events
 */

use crate::events::{Event, Severity};
use parking_lot::Mutex;

/// Destination for lifecycle events
///
/// Implementations must not block: `emit` runs inside release paths,
/// including drops during unwinding.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: Event);
}

/// In-memory buffering sink
///
/// Collects events for later inspection. Used by tests and by embedders
/// that forward batches elsewhere.
#[derive(Debug, Default)]
pub struct Collector {
    buffer: Mutex<Vec<Event>>,
}

impl Collector {
    pub fn new() -> Self {
        Self {
            buffer: Mutex::new(Vec::new()),
        }
    }

    /// Number of buffered events
    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Remove and return all buffered events
    pub fn drain(&self) -> Vec<Event> {
        std::mem::take(&mut *self.buffer.lock())
    }

    /// Copy of the buffered events, leaving the buffer intact
    pub fn snapshot(&self) -> Vec<Event> {
        self.buffer.lock().clone()
    }
}

impl EventSink for Collector {
    fn emit(&self, event: Event) {
        self.buffer.lock().push(event);
    }
}

/// Sink that renders events through the `log` facade
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogSink {
    fn emit(&self, event: Event) {
        match event.severity {
            Severity::Debug => log::debug!("{}", event),
            Severity::Info => log::info!("{}", event),
            Severity::Warn => log::warn!("{}", event),
            Severity::Error => log::error!("{}", event),
        }
    }
}
