//! Shared service state observed by the presentation layer.
//!
//! A [`ServiceState`] is a cheap handle onto the loading flag, the filter
//! echo, and the request counter. The SDK owns one by default, but a caller
//! may create it up front and inject it through the builder so the UI reads
//! the same instance.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::FilterEcho;

/// Identifier handed to each request, increasing from 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
struct Inner {
    in_flight: usize,
    latest: RequestId,
    filters: FilterEcho,
}

/// Loading flag, filter echo and request bookkeeping.
///
/// Overlapping requests each hold their own [`LoadingGuard`], so the flag
/// stays set until the last of them resolves.
#[derive(Clone, Default)]
pub struct ServiceState {
    inner: Arc<Mutex<Inner>>,
}

impl ServiceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while at least one request is in flight.
    pub fn is_loading(&self) -> bool {
        self.lock().in_flight > 0
    }

    /// Number of requests currently in flight.
    pub fn in_flight(&self) -> usize {
        self.lock().in_flight
    }

    /// The last-applied search filters.
    pub fn filters(&self) -> FilterEcho {
        self.lock().filters.clone()
    }

    /// Identifier of the most recently started request.
    pub fn latest_request(&self) -> RequestId {
        self.lock().latest
    }

    /// Whether `id` belongs to the most recently started request.
    ///
    /// Responses for older ids have been superseded and may be discarded.
    pub fn is_latest(&self, id: RequestId) -> bool {
        self.lock().latest == id
    }

    pub(crate) fn record_filters(&self, filters: FilterEcho) {
        self.lock().filters.apply(filters);
    }

    /// Mark a request as started. The flag clears when the guard drops.
    pub(crate) fn begin(&self) -> LoadingGuard {
        let mut inner = self.lock();
        inner.in_flight += 1;
        inner.latest = RequestId(inner.latest.0 + 1);
        LoadingGuard {
            state: self.clone(),
            id: inner.latest,
        }
    }

    // No critical section can leave `Inner` half-written; poison is ignored.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("ServiceState")
            .field("in_flight", &inner.in_flight)
            .field("latest", &inner.latest)
            .field("filters", &inner.filters)
            .finish()
    }
}

/// Keeps the loading flag raised for one request.
#[must_use]
pub struct LoadingGuard {
    state: ServiceState,
    id: RequestId,
}

impl LoadingGuard {
    pub fn id(&self) -> RequestId {
        self.id
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let mut inner = self.state.lock();
        inner.in_flight = inner.in_flight.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_raises_and_clears_flag() {
        let state = ServiceState::new();
        assert!(!state.is_loading());

        let guard = state.begin();
        assert!(state.is_loading());
        assert_eq!(guard.id(), RequestId(1));

        drop(guard);
        assert!(!state.is_loading());
    }

    #[test]
    fn overlapping_requests_keep_flag_until_last_resolves() {
        let state = ServiceState::new();
        let first = state.begin();
        let second = state.begin();

        drop(second);
        assert!(state.is_loading());
        assert!(!state.is_latest(first.id()));

        drop(first);
        assert!(!state.is_loading());
        assert_eq!(state.latest_request(), RequestId(2));
    }

    #[test]
    fn filters_overwrite_only_specified_fields() {
        let state = ServiceState::new();
        state.record_filters(FilterEcho {
            name: Some("pikachu".into()),
            rarity: Some("Rare".into()),
            ..Default::default()
        });
        state.record_filters(FilterEcho {
            name: Some("eevee".into()),
            ..Default::default()
        });

        let echo = state.filters();
        assert_eq!(echo.name.as_deref(), Some("eevee"));
        assert_eq!(echo.rarity.as_deref(), Some("Rare"));
        assert_eq!(echo.set, None);
    }
}
