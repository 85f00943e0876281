/*!
 * Resource Lifecycle Handles
 *
 * Deterministic single-owner handles with exactly-once release.
 *
 * ## Design Principles
 *
 * 1. **Exactly-once release**: explicit release and the drop fallback
 *    race through one atomic flag; only one of them runs the cleanup
 * 2. **Observable**: acquisition and release emit events to a pluggable sink
 * 3. **Explicit sharing**: the live-resource counter is injected, never global
 * 4. **Recoverable errors**: use-after-release is a reported error, not UB
 *
 * ## Example
 *
 * ```rust
 * use resguard::{Collector, LiveCounter, ResourceHandle};
 * use std::sync::Arc;
 *
 * let counter = Arc::new(LiveCounter::new());
 * let sink = Arc::new(Collector::new());
 *
 * let handle = ResourceHandle::new("file-1", counter, Some(sink)).unwrap();
 * println!("{}", handle.details().unwrap());
 * handle.release();
 * // Further release() calls are no-ops; drop will not release again
 * ```
 */

mod counter;
mod events;
mod handle;
mod scoped;
mod sink;

pub use counter::LiveCounter;
pub use events::{Event, Payload, ReleasePath, Severity};
pub use handle::{Resource, ResourceHandle};
pub use scoped::scoped;
pub use sink::{Collector, EventSink, LogSink};

/// Result type for handle operations
pub type HandleResult<T> = Result<T, HandleError>;

/// Errors that can occur during handle operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandleError {
    #[error("Resource already released")]
    AlreadyReleased,

    #[error("Resource label must not be empty")]
    EmptyLabel,
}

/// Handle metadata for observability
#[derive(Debug, Clone)]
pub struct HandleMetadata {
    pub resource_type: &'static str,
    pub creation_time: std::time::Instant,
}

impl HandleMetadata {
    #[inline]
    pub fn new(resource_type: &'static str) -> Self {
        Self {
            resource_type,
            creation_time: std::time::Instant::now(),
        }
    }

    #[inline]
    pub fn lifetime_micros(&self) -> u64 {
        self.creation_time.elapsed().as_micros() as u64
    }
}
