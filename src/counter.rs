/*!
 * Live-Resource Counter
 *
 * Shared diagnostic counter across handles. Sharing is explicit: handles
 * that participate receive the same `Arc<LiveCounter>` at construction.
 */

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts live resources across the handles that share it.
///
/// The managed release step zeroes the counter rather than decrementing
/// it: the count reports live resources between full release cycles, not
/// a per-handle balance.
#[derive(Debug, Default)]
pub struct LiveCounter {
    live: AtomicUsize,
}

impl LiveCounter {
    pub fn new() -> Self {
        Self {
            live: AtomicUsize::new(0),
        }
    }

    /// Current number of live resources
    #[inline]
    pub fn live(&self) -> usize {
        self.live.load(Ordering::Relaxed)
    }

    /// Record a newly acquired resource
    #[inline]
    pub(crate) fn acquire(&self) {
        self.live.fetch_add(1, Ordering::Relaxed);
    }

    /// Zero the counter. Runs as the managed step of an explicit release.
    #[inline]
    pub(crate) fn reset(&self) {
        self.live.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_acquire_and_reset() {
        let counter = LiveCounter::new();
        assert_eq!(counter.live(), 0);

        counter.acquire();
        counter.acquire();
        assert_eq!(counter.live(), 2);

        // Reset zeroes, it does not decrement
        counter.reset();
        assert_eq!(counter.live(), 0);
    }
}
