//! The process-wide fetch cache.
//!
//! One instance is provided as app context. All mutation happens behind
//! per-key locks; the single-threaded UI event loop never blocks on them for
//! longer than an in-flight loader.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use api::ApiError;
use tokio::sync::Mutex;
use tokio::sync::RwLock;
use web_time::Instant;

use super::FetchKey;

type StoredValue = Result<Arc<dyn Any + Send + Sync>, ApiError>;

#[derive(Default)]
struct Slot {
    stored: Option<(StoredValue, Instant)>,
}

impl Slot {
    /// Returns the cached outcome for `T`, if present and fresh enough.
    ///
    /// One value type per key: a stored value that does not downcast to `T`
    /// is reported as absent, so the caller refetches and overwrites it.
    fn get<T>(&self, max_age: Option<Duration>) -> Option<Result<T, ApiError>>
    where
        T: Clone + Send + Sync + 'static,
    {
        let (stored, fetched_at) = self.stored.as_ref()?;
        if let Some(limit) = max_age {
            if fetched_at.elapsed() >= limit {
                return None;
            }
        }
        match stored {
            Ok(any) => any.downcast_ref::<T>().map(|value| Ok(value.clone())),
            Err(err) => Some(Err(err.clone())),
        }
    }

    fn store<T>(&mut self, outcome: &Result<T, ApiError>)
    where
        T: Clone + Send + Sync + 'static,
    {
        let stored = match outcome {
            Ok(value) => Ok(Arc::new(value.clone()) as Arc<dyn Any + Send + Sync>),
            Err(err) => Err(err.clone()),
        };
        self.stored = Some((stored, Instant::now()));
    }
}

/// Shared cache of request outcomes, keyed by [`FetchKey`].
///
/// Cloning the handle shares the underlying store.
#[derive(Clone, Default)]
pub struct FetchCache {
    entries: Arc<Mutex<HashMap<FetchKey, Arc<RwLock<Slot>>>>>,
}

impl FetchCache {
    pub fn new() -> Self {
        Self::default()
    }

    async fn entry(&self, key: &FetchKey) -> Arc<RwLock<Slot>> {
        let mut entries = self.entries.lock().await;
        entries.entry(key.clone()).or_default().clone()
    }

    async fn existing_entry(&self, key: &FetchKey) -> Option<Arc<RwLock<Slot>>> {
        self.entries.lock().await.get(key).cloned()
    }

    /// Returns the outcome for `key`, invoking `loader` at most once across
    /// all concurrent callers.
    ///
    /// The first caller to find the slot empty (or stale, per `max_age`)
    /// holds the per-key write lock across the loader; everyone else parks on
    /// the lock and picks up the stored outcome when it is released. Failed
    /// outcomes are cached and shared exactly like successes.
    pub async fn fetch<T, F, Fut>(
        &self,
        key: &FetchKey,
        max_age: Option<Duration>,
        loader: F,
    ) -> Result<T, ApiError>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let entry = self.entry(key).await;
        {
            let slot = entry.read().await;
            if let Some(outcome) = slot.get::<T>(max_age) {
                return outcome;
            }
        }

        let mut slot = entry.write().await;
        // Another observer may have filled the slot while we waited.
        if let Some(outcome) = slot.get::<T>(max_age) {
            return outcome;
        }

        let outcome = loader().await;
        slot.store(&outcome);
        outcome
    }

    /// Unconditionally re-invokes `loader` and replaces the stored outcome.
    pub async fn refresh<T, F, Fut>(&self, key: &FetchKey, loader: F) -> Result<T, ApiError>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let entry = self.entry(key).await;
        let mut slot = entry.write().await;
        let outcome = loader().await;
        slot.store(&outcome);
        outcome
    }

    /// Reads the cached outcome for `key` without fetching.
    pub async fn peek<T>(&self, key: &FetchKey) -> Option<Result<T, ApiError>>
    where
        T: Clone + Send + Sync + 'static,
    {
        let entry = self.existing_entry(key).await?;
        let slot = entry.read().await;
        slot.get::<T>(None)
    }

    /// Drops the cached outcome for `key`; the next fetch reloads.
    pub async fn invalidate(&self, key: &FetchKey) {
        if let Some(entry) = self.existing_entry(key).await {
            entry.write().await.stored = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use super::*;

    fn counting_loader(
        calls: &Arc<AtomicUsize>,
        value: u32,
    ) -> impl Fn() -> std::pin::Pin<Box<dyn Future<Output = Result<u32, ApiError>> + Send>> {
        let calls = calls.clone();
        move || {
            let calls = calls.clone();
            Box::pin(async move {
                calls.fetch_add(1, Ordering::SeqCst);
                // Hold the slot long enough for a second observer to arrive.
                tokio::time::sleep(Duration::from_millis(10)).await;
                Ok(value)
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_observers_share_one_loader_invocation() {
        let cache = FetchCache::new();
        let key = FetchKey::new("info").join("btc-bitcoin");
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = counting_loader(&calls, 42);

        let (a, b) = tokio::join!(
            cache.fetch(&key, None, &loader),
            cache.fetch(&key, None, &loader),
        );

        assert_eq!(a, Ok(42));
        assert_eq!(a, b);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn distinct_keys_fetch_independently() {
        let cache = FetchCache::new();
        let calls = Arc::new(AtomicUsize::new(0));

        for id in ["btc-bitcoin", "eth-ethereum"] {
            let key = FetchKey::new("info").join(id);
            let calls = calls.clone();
            let outcome = cache
                .fetch(&key, None, move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<String, ApiError>(id.to_string())
                })
                .await;
            assert_eq!(outcome, Ok(id.to_string()));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_outcomes_are_cached_and_shared() {
        let cache = FetchCache::new();
        let key = FetchKey::new("info").join("nope");
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let calls = calls.clone();
            let outcome: Result<u32, ApiError> = cache
                .fetch(&key, None, move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err(ApiError::NotFound("nope".into()))
                })
                .await;
            assert_eq!(outcome, Err(ApiError::NotFound("nope".into())));
        }

        // The second observer resolved from the cached failure.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn refresh_reinvokes_after_failure() {
        let cache = FetchCache::new();
        let key = FetchKey::new("tickers").join("btc-bitcoin");

        let failing: Result<u32, ApiError> = cache
            .fetch(&key, None, || async { Err(ApiError::Status(500)) })
            .await;
        assert!(failing.is_err());

        let recovered = cache.refresh(&key, || async { Ok(9u32) }).await;
        assert_eq!(recovered, Ok(9));

        // The recovery replaced the cached failure for later observers.
        assert_eq!(cache.peek::<u32>(&key).await, Some(Ok(9)));
    }

    #[tokio::test]
    async fn zero_max_age_forces_refetch() {
        let cache = FetchCache::new();
        let key = FetchKey::new("coins");
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let calls = calls.clone();
            let _ = cache
                .fetch(&key, Some(Duration::ZERO), move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<u32, ApiError>(1)
                })
                .await;
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn unbounded_entries_stay_fresh_forever() {
        let cache = FetchCache::new();
        let key = FetchKey::new("coins");
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let calls = calls.clone();
            let _ = cache
                .fetch(&key, None, move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<u32, ApiError>(1)
                })
                .await;
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn type_mismatch_is_treated_as_absent() {
        let cache = FetchCache::new();
        let key = FetchKey::new("coins");

        let first = cache
            .fetch(&key, None, || async { Ok::<u32, ApiError>(1) })
            .await;
        assert_eq!(first, Ok(1));

        // Same key observed at a different type refetches and overwrites.
        let second = cache
            .fetch(&key, None, || async { Ok::<String, ApiError>("one".into()) })
            .await;
        assert_eq!(second, Ok("one".to_string()));
        assert_eq!(cache.peek::<u32>(&key).await, None);
    }

    #[tokio::test]
    async fn invalidate_clears_the_entry() {
        let cache = FetchCache::new();
        let key = FetchKey::new("coins");

        let _ = cache
            .fetch(&key, None, || async { Ok::<u32, ApiError>(1) })
            .await;
        assert_eq!(cache.peek::<u32>(&key).await, Some(Ok(1)));

        cache.invalidate(&key).await;
        assert_eq!(cache.peek::<u32>(&key).await, None);
    }
}
