//! # Page Cache
//!
//! Keyed cache of fetched pages, one instance per resource. Together with the
//! resource clients it forms the mutation coordinator: every successful
//! mutation calls [`PageCache::invalidate`], which marks every page of that
//! resource stale so the next read re-fetches from the table.
//!
//! ## Coalescing
//!
//! `get_or_fetch` guarantees that at most one fetch is in flight per page: a
//! second caller for a pending page awaits the same result over a watch
//! channel instead of issuing a duplicate request. This is the only
//! concurrency-control guarantee in the system.
//!
//! ## Staleness window
//!
//! Invalidation bumps a generation counter and clears the slots. A fetch that
//! completes *after* an invalidation is still delivered to its waiters (they
//! asked before the mutation) but is not stored, so the next read hits the
//! table again.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::pagination::PageResult;
use crate::store::StoreError;

type FetchResult<T> = Result<Arc<PageResult<T>>, StoreError>;

enum Slot<T> {
    Ready(Arc<PageResult<T>>),
    Pending(watch::Receiver<Option<FetchResult<T>>>),
}

struct Inner<T> {
    generation: u64,
    slots: HashMap<u32, Slot<T>>,
}

/// Cache of the last-fetched pages for one resource.
///
/// Explicitly constructed and passed to the components that need it; there is
/// no ambient module state.
pub struct PageCache<T> {
    resource: &'static str,
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for PageCache<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource,
            inner: self.inner.clone(),
        }
    }
}

enum Lookup<T> {
    Ready(Arc<PageResult<T>>),
    Pending(watch::Receiver<Option<FetchResult<T>>>),
    Miss {
        notify: watch::Sender<Option<FetchResult<T>>>,
        generation: u64,
    },
}

impl<T: Clone + Send + Sync + 'static> PageCache<T> {
    pub fn new(resource: &'static str) -> Self {
        Self {
            resource,
            inner: Arc::new(Mutex::new(Inner {
                generation: 0,
                slots: HashMap::new(),
            })),
        }
    }

    /// Returns the cached page, joins an in-flight fetch for it, or runs
    /// `fetch` and stores the result.
    ///
    /// Failures are returned to every waiter but never cached.
    pub async fn get_or_fetch<F, Fut>(&self, page: u32, fetch: F) -> FetchResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<PageResult<T>, StoreError>>,
    {
        let lookup = {
            let mut inner = self.inner.lock().unwrap();
            match inner.slots.get(&page) {
                Some(Slot::Ready(cached)) => Lookup::Ready(cached.clone()),
                Some(Slot::Pending(rx)) => Lookup::Pending(rx.clone()),
                None => {
                    let (tx, rx) = watch::channel(None);
                    inner.slots.insert(page, Slot::Pending(rx));
                    Lookup::Miss {
                        notify: tx,
                        generation: inner.generation,
                    }
                }
            }
        };

        match lookup {
            Lookup::Ready(cached) => {
                debug!(resource = self.resource, page, "cache hit");
                Ok(cached)
            }
            Lookup::Pending(mut rx) => {
                debug!(resource = self.resource, page, "joining in-flight fetch");
                let outcome = match rx.wait_for(|slot| slot.is_some()).await {
                    Ok(value) => value.clone(),
                    Err(_) => None,
                };
                match outcome {
                    Some(result) => result,
                    None => {
                        // The fetching caller went away mid-flight; drop the
                        // orphaned slot so the next read retries.
                        self.inner.lock().unwrap().slots.remove(&page);
                        Err(StoreError::TableDropped)
                    }
                }
            }
            Lookup::Miss { notify, generation } => {
                debug!(resource = self.resource, page, "cache miss, fetching");
                let result = fetch().await.map(Arc::new);
                {
                    let mut inner = self.inner.lock().unwrap();
                    if inner.generation == generation {
                        match &result {
                            Ok(value) => {
                                inner.slots.insert(page, Slot::Ready(value.clone()));
                            }
                            Err(_) => {
                                inner.slots.remove(&page);
                            }
                        }
                    }
                    // A newer generation means an invalidation raced this
                    // fetch; the waiters still get the result below, the
                    // cache stays clear.
                }
                let _ = notify.send(Some(result.clone()));
                result
            }
        }
    }

    /// Marks every page of this resource stale.
    pub fn invalidate(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.generation += 1;
        inner.slots.clear();
        info!(resource = self.resource, "cache invalidated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::oneshot;

    fn page_of(items: Vec<u32>) -> PageResult<u32> {
        let total = items.len();
        PageResult { items, total, total_pages: 1 }
    }

    #[tokio::test]
    async fn second_read_hits_the_cache() {
        let cache = PageCache::<u32>::new("numbers");
        let fetches = AtomicUsize::new(0);

        for _ in 0..3 {
            let result = cache
                .get_or_fetch(1, || async {
                    fetches.fetch_add(1, Ordering::SeqCst);
                    Ok(page_of(vec![1, 2, 3]))
                })
                .await
                .unwrap();
            assert_eq!(result.items, vec![1, 2, 3]);
        }

        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn concurrent_readers_share_one_fetch() {
        let cache = Arc::new(PageCache::<u32>::new("numbers"));
        let fetches = Arc::new(AtomicUsize::new(0));
        let (release_tx, release_rx) = oneshot::channel::<()>();

        // First reader starts a fetch that blocks until released.
        let first = {
            let cache = cache.clone();
            let fetches = fetches.clone();
            tokio::spawn(async move {
                cache
                    .get_or_fetch(1, || async move {
                        fetches.fetch_add(1, Ordering::SeqCst);
                        let _ = release_rx.await;
                        Ok(page_of(vec![7]))
                    })
                    .await
            })
        };

        // Give the first reader time to claim the slot.
        tokio::task::yield_now().await;

        // Second reader joins the pending fetch; its own closure never runs.
        let second = {
            let cache = cache.clone();
            let fetches = fetches.clone();
            tokio::spawn(async move {
                cache
                    .get_or_fetch(1, || async move {
                        fetches.fetch_add(1, Ordering::SeqCst);
                        Ok(page_of(vec![99]))
                    })
                    .await
            })
        };

        tokio::task::yield_now().await;
        let _ = release_tx.send(());

        let a = first.await.unwrap().unwrap();
        let b = second.await.unwrap().unwrap();
        assert_eq!(a.items, vec![7]);
        assert_eq!(b.items, vec![7]);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalidate_forces_a_refetch() {
        let cache = PageCache::<u32>::new("numbers");

        let first = cache
            .get_or_fetch(1, || async { Ok(page_of(vec![1])) })
            .await
            .unwrap();
        assert_eq!(first.items, vec![1]);

        cache.invalidate();

        let second = cache
            .get_or_fetch(1, || async { Ok(page_of(vec![2])) })
            .await
            .unwrap();
        assert_eq!(second.items, vec![2]);
    }

    #[tokio::test]
    async fn errors_are_returned_but_never_cached() {
        let cache = PageCache::<u32>::new("numbers");

        let err = cache
            .get_or_fetch(1, || async {
                Err(StoreError::Remote("network error".into()))
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "network error");

        // The failure did not poison the slot.
        let ok = cache
            .get_or_fetch(1, || async { Ok(page_of(vec![5])) })
            .await
            .unwrap();
        assert_eq!(ok.items, vec![5]);
    }

    #[tokio::test]
    async fn fetch_completing_after_invalidation_is_not_stored() {
        let cache = Arc::new(PageCache::<u32>::new("numbers"));
        let (release_tx, release_rx) = oneshot::channel::<()>();

        let reader = {
            let cache = cache.clone();
            tokio::spawn(async move {
                cache
                    .get_or_fetch(1, || async move {
                        let _ = release_rx.await;
                        Ok(page_of(vec![1]))
                    })
                    .await
            })
        };

        tokio::task::yield_now().await;
        cache.invalidate();
        let _ = release_tx.send(());

        // The in-flight reader still gets its page...
        let stale = reader.await.unwrap().unwrap();
        assert_eq!(stale.items, vec![1]);

        // ...but the cache refetches on the next read.
        let fetches = AtomicUsize::new(0);
        let fresh = cache
            .get_or_fetch(1, || async {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok(page_of(vec![2]))
            })
            .await
            .unwrap();
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert_eq!(fresh.items, vec![2]);
    }
}
