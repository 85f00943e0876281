/*!
 * Scoped Acquisition
 *
 * Guaranteed release on every exit path from a scope
 */

use crate::counter::LiveCounter;
use crate::handle::ResourceHandle;
use crate::sink::EventSink;
use crate::HandleResult;
use std::sync::Arc;

/// Acquire a resource for the duration of `f`
///
/// The handle is released when `f` returns, whatever it returns. If `f`
/// panics, the drop fallback releases the resource during unwinding, so
/// exactly one release happens on every exit path.
///
/// # Example
///
/// ```rust
/// use resguard::{scoped, LiveCounter};
/// use std::sync::Arc;
///
/// let counter = Arc::new(LiveCounter::new());
/// let len = scoped("file-2", counter, None, |handle| {
///     handle.details().map(|d| d.len())
/// }).unwrap();
/// assert!(len.is_ok());
/// ```
pub fn scoped<R>(
    label: impl Into<String>,
    counter: Arc<LiveCounter>,
    sink: Option<Arc<dyn EventSink>>,
    f: impl FnOnce(&ResourceHandle) -> R,
) -> HandleResult<R> {
    let handle = ResourceHandle::new(label, counter, sink)?;
    let out = f(&handle);
    handle.release();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Payload, ReleasePath};
    use crate::sink::Collector;

    #[test]
    fn test_scoped_releases_on_exit() {
        let counter = Arc::new(LiveCounter::new());
        let collector = Arc::new(Collector::new());

        let value = scoped("file-2", counter.clone(), Some(collector.clone()), |handle| {
            assert!(handle.is_live());
            42
        })
        .unwrap();

        assert_eq!(value, 42);
        assert_eq!(counter.live(), 0);

        let released: Vec<_> = collector
            .drain()
            .into_iter()
            .filter(|e| matches!(e.payload, Payload::ResourceReleased { .. }))
            .collect();
        assert_eq!(released.len(), 1);
        assert_eq!(released[0].label(), "file-2");
        assert!(matches!(
            released[0].payload,
            Payload::ResourceReleased {
                via: ReleasePath::Explicit,
                ..
            }
        ));
    }

    #[test]
    fn test_scoped_releases_on_error_return() {
        let counter = Arc::new(LiveCounter::new());
        let collector = Arc::new(Collector::new());

        let out: HandleResult<Result<(), String>> = scoped(
            "file-2",
            counter,
            Some(collector.clone()),
            |_handle| Err("boom".to_string()),
        );

        assert!(out.unwrap().is_err());
        let released = collector
            .drain()
            .into_iter()
            .filter(|e| matches!(e.payload, Payload::ResourceReleased { .. }))
            .count();
        assert_eq!(released, 1);
    }
}
