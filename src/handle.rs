/*!
 * Resource Handles
 *
 * Single-owner handles that release their resource exactly once, either
 * through an explicit `release()` or through the drop fallback
 */

use crate::counter::LiveCounter;
use crate::events::{Event, Payload, ReleasePath, Severity};
use crate::sink::EventSink;
use crate::{HandleError, HandleMetadata, HandleResult};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Owned resource payload, identified by its label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    label: String,
}

impl Resource {
    fn new(label: String) -> Self {
        Self { label }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Handle owning exactly one [`Resource`]
///
/// The resource is released exactly once: either by [`release`], or by the
/// drop fallback if the handle is discarded while still live. Repeated
/// `release()` calls are no-ops, and an explicit release disarms the drop
/// fallback.
///
/// # Example
///
/// ```rust
/// use resguard::{Collector, LiveCounter, ResourceHandle};
/// use std::sync::Arc;
///
/// let counter = Arc::new(LiveCounter::new());
/// let handle = ResourceHandle::new("file-1", counter, None).unwrap();
/// handle.release();
/// handle.release(); // no-op
/// ```
///
/// [`release`]: ResourceHandle::release
pub struct ResourceHandle {
    slot: Mutex<Option<Resource>>,
    released: AtomicBool,
    counter: Arc<LiveCounter>,
    sink: Option<Arc<dyn EventSink>>,
    metadata: HandleMetadata,
}

impl ResourceHandle {
    /// Acquire a new resource identified by `label`
    ///
    /// Increments the shared counter and emits a `ResourceAcquired` event.
    /// Fails with [`HandleError::EmptyLabel`] before anything is acquired,
    /// leaving the counter untouched.
    pub fn new(
        label: impl Into<String>,
        counter: Arc<LiveCounter>,
        sink: Option<Arc<dyn EventSink>>,
    ) -> HandleResult<Self> {
        let label = label.into();
        if label.is_empty() {
            return Err(HandleError::EmptyLabel);
        }

        let acquired = label.clone();
        let resource = Resource::new(label);
        counter.acquire();

        let handle = Self {
            slot: Mutex::new(Some(resource)),
            released: AtomicBool::new(false),
            counter,
            sink,
            metadata: HandleMetadata::new("resource"),
        };

        handle.emit(Severity::Info, Payload::ResourceAcquired { label: acquired });
        Ok(handle)
    }

    /// Whether the handle still owns its resource
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.released.load(Ordering::Acquire)
    }

    /// Get handle metadata
    #[inline]
    pub fn metadata(&self) -> &HandleMetadata {
        &self.metadata
    }

    /// Human-readable description of the live resource
    ///
    /// Returns [`HandleError::AlreadyReleased`] once the handle has
    /// released; it never reports a cleared resource as live.
    pub fn details(&self) -> HandleResult<String> {
        if !self.is_live() {
            return Err(HandleError::AlreadyReleased);
        }

        let slot = self.slot.lock();
        // The flag may have been won between the check above and taking
        // the lock; the slot is the source of truth here.
        let resource = slot.as_ref().ok_or(HandleError::AlreadyReleased)?;
        Ok(format!(
            "The {} resource has been successfully created",
            resource.label()
        ))
    }

    /// Release the resource
    ///
    /// Idempotent: the first call resets the shared counter, clears the
    /// ownership slot and emits one `ResourceReleased` event; later calls
    /// return without effect. Winning here also disarms the drop fallback.
    pub fn release(&self) {
        self.release_via(ReleasePath::Explicit);
    }

    fn release_via(&self, via: ReleasePath) {
        if self
            .released
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            // Already released through either path
            return;
        }

        // Managed step: only the explicit path may touch cooperating
        // state. On the fallback path the rest of the process may be
        // mid-teardown, so only the owned resource itself is released.
        if matches!(via, ReleasePath::Explicit) {
            self.counter.reset();
        }

        let resource = self.slot.lock().take();
        // Lock released before emitting: sinks run arbitrary code.
        if let Some(resource) = resource {
            self.emit(
                Severity::Info,
                Payload::ResourceReleased {
                    label: resource.label,
                    via,
                    lifetime_micros: self.metadata.lifetime_micros(),
                },
            );
        }
    }

    fn emit(&self, severity: Severity, payload: Payload) {
        if let Some(ref sink) = self.sink {
            sink.emit(Event::new(severity, payload));
        }
    }
}

impl Drop for ResourceHandle {
    fn drop(&mut self) {
        self.release_via(ReleasePath::Fallback);
    }
}
