//! The hook every data-bearing screen fetches through.

use std::future::Future;

use api::ApiError;
use dioxus::prelude::*;
use futures::StreamExt;

use crate::remote::refetch_loop;
use crate::remote::FetchCache;
use crate::remote::FetchKey;
use crate::remote::RemoteOptions;
use crate::remote::ResourceState;

/// Handle to one observed remote resource.
///
/// `state` is the only thing most screens touch; `restart` backs the Retry
/// button on error cards and always bypasses the cache.
pub struct Remote<T: 'static> {
    pub state: Signal<ResourceState<T>>,
    refresher: Coroutine<()>,
}

impl<T> Clone for Remote<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Remote<T> {}

impl<T> Remote<T> {
    /// Forces a fresh loader invocation, replacing any cached outcome.
    pub fn restart(&self) {
        self.refresher.send(());
    }
}

/// Observes the resource identified by `key`, loading it through the shared
/// [`FetchCache`].
///
/// On mount the state transitions `Idle -> Loading -> Ready/Failed`; the
/// loader runs at most once per key across all concurrent observers. With
/// `options.refetch_interval` set, a companion task re-invokes the loader on
/// that fixed schedule regardless of the previous outcome. Unmounting the
/// observing component drops its tasks: the pending update is discarded and
/// nothing else is touched.
///
/// The key is read once at mount; screens whose key follows a route
/// parameter remount through an rsx `key` attribute.
pub fn use_remote<T, F, Fut>(key: FetchKey, options: RemoteOptions, loader: F) -> Remote<T>
where
    T: Clone + Send + Sync + PartialEq + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let cache = use_context::<FetchCache>();
    let mut state = use_signal(|| ResourceState::<T>::Idle);

    // First observation.
    use_future({
        let cache = cache.clone();
        let key = key.clone();
        let loader = loader.clone();
        move || {
            let cache = cache.clone();
            let key = key.clone();
            let loader = loader.clone();
            async move {
                state.set(ResourceState::Loading);
                let outcome = cache.fetch(&key, options.max_age, || loader()).await;
                state.set(outcome.into());
            }
        }
    });

    // Timer-driven refresh, error-blind by design.
    use_future({
        let cache = cache.clone();
        let key = key.clone();
        let loader = loader.clone();
        move || {
            let cache = cache.clone();
            let key = key.clone();
            let loader = loader.clone();
            async move {
                let Some(every) = options.refetch_interval else {
                    return;
                };
                refetch_loop(cache, key, loader, every, move |outcome| {
                    state.set(outcome.into());
                })
                .await;
            }
        }
    });

    // Manual retry channel.
    let refresher = use_coroutine(move |mut rx: UnboundedReceiver<()>| {
        let cache = cache.clone();
        let key = key.clone();
        let loader = loader.clone();
        async move {
            while rx.next().await.is_some() {
                state.set(ResourceState::Loading);
                let outcome = cache.refresh(&key, || loader()).await;
                state.set(outcome.into());
            }
        }
    });

    Remote { state, refresher }
}
