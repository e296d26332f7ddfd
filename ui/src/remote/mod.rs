//! Keyed remote-resource fetching.
//!
//! Every data-bearing screen observes the network through the same pieces: a
//! [`FetchKey`] naming the request, the shared [`FetchCache`] that
//! deduplicates and stores outcomes, and a [`ResourceState`] describing where
//! one observation currently stands.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use api::ApiError;

mod cache;

pub use cache::FetchCache;

/// Ordered tuple of string segments identifying a cacheable request.
///
/// Non-empty by construction: [`FetchKey::new`] seeds the first segment and
/// [`FetchKey::join`] appends the rest. Two equal keys are the same cache
/// entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FetchKey(Vec<String>);

impl FetchKey {
    pub fn new(root: impl Into<String>) -> Self {
        Self(vec![root.into()])
    }

    pub fn join(mut self, segment: impl Into<String>) -> Self {
        self.0.push(segment.into());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for FetchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// Tagged state of one asynchronous fetch.
///
/// Produced and owned by the fetcher side; consumers only ever read it.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ResourceState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> ResourceState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Idle or Loading: the outcome is not known yet.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Drops the payload, keeping only the phase (and any failure), for
    /// feeding resources without a display name to the view-state reducer.
    pub fn status_probe(&self) -> ResourceState<Option<String>> {
        match self {
            Self::Idle => ResourceState::Idle,
            Self::Loading => ResourceState::Loading,
            Self::Ready(_) => ResourceState::Ready(None),
            Self::Failed(err) => ResourceState::Failed(err.clone()),
        }
    }
}

impl<T> From<Result<T, ApiError>> for ResourceState<T> {
    fn from(outcome: Result<T, ApiError>) -> Self {
        match outcome {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err),
        }
    }
}

/// Options accepted by `use_remote`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemoteOptions {
    /// Re-invoke the loader on this fixed schedule, success or failure.
    pub refetch_interval: Option<Duration>,
    /// Treat cached outcomes older than this as absent.
    pub max_age: Option<Duration>,
}

/// Sleeps `every`, refreshes `key`, reports the outcome, forever.
///
/// Deliberately not error-aware: a failed pass is reported and the timer
/// keeps running.
pub async fn refetch_loop<T, F, Fut>(
    cache: FetchCache,
    key: FetchKey,
    loader: F,
    every: Duration,
    mut on_update: impl FnMut(Result<T, ApiError>),
) where
    T: Clone + Send + Sync + 'static,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    loop {
        crate::compat::sleep(every).await;
        let outcome = cache.refresh(&key, &loader).await;
        if let Err(err) = &outcome {
            dioxus_logger::tracing::warn!("scheduled refresh of {key} failed: {err}");
        }
        on_update(outcome);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn keys_compare_segment_wise() {
        let a = FetchKey::new("info").join("btc-bitcoin");
        let b = FetchKey::new("info").join("btc-bitcoin");
        let c = FetchKey::new("tickers").join("btc-bitcoin");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "info/btc-bitcoin");
        assert_eq!(a.segments().len(), 2);
    }

    #[test]
    fn state_transitions_from_outcomes() {
        let ready: ResourceState<u32> = Ok(7).into();
        assert_eq!(ready.data(), Some(&7));
        assert!(ready.is_ready());

        let failed: ResourceState<u32> = Err(ApiError::Status(500)).into();
        assert!(failed.is_failed());
        assert_eq!(failed.error(), Some(&ApiError::Status(500)));
        assert!(ResourceState::<u32>::Idle.is_pending());
        assert!(ResourceState::<u32>::Loading.is_pending());
    }

    #[test]
    fn status_probe_keeps_phase_and_failure_only() {
        let ready = ResourceState::Ready(vec![1u8, 2, 3]);
        assert_eq!(ready.status_probe(), ResourceState::Ready(None));

        let failed: ResourceState<Vec<u8>> = ResourceState::Failed(ApiError::Status(429));
        assert_eq!(
            failed.status_probe(),
            ResourceState::Failed(ApiError::Status(429))
        );
    }

    // A 5 s interval observed for 11 s must fire at least twice.
    #[tokio::test(start_paused = true)]
    async fn interval_refetch_fires_at_least_twice_in_eleven_seconds() {
        let cache = FetchCache::new();
        let key = FetchKey::new("tickers").join("btc-bitcoin");

        let calls = Arc::new(AtomicUsize::new(0));
        let loader = {
            let calls = calls.clone();
            move || {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<u32, ApiError>(1)
                }
            }
        };

        let updates = Arc::new(AtomicUsize::new(0));
        let seen = updates.clone();
        let observed = refetch_loop(
            cache,
            key,
            loader,
            Duration::from_millis(5000),
            move |outcome| {
                assert_eq!(outcome, Ok(1));
                seen.fetch_add(1, Ordering::SeqCst);
            },
        );

        // The loop never returns; the timeout bounds the observation window.
        let _ = tokio::time::timeout(Duration::from_secs(11), observed).await;

        assert!(calls.load(Ordering::SeqCst) >= 2);
        assert_eq!(calls.load(Ordering::SeqCst), updates.load(Ordering::SeqCst));
    }
}
