//! Async intent orchestration for one entity type.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::model::{Entity, EntityId};
use crate::rest::{ErrorDetail, PageQuery, RestClient, RestError};
use crate::store::event::EntityEvent;
use crate::store::merge::FetchMode;
use crate::store::reducer::{EntityReducer, Reducer};
use crate::store::state::Snapshot;

/// Observable state store for one entity type.
///
/// Each intent runs as an async task: it applies its pending event, suspends
/// at the network boundary, then reduces the outcome into the snapshot.
/// Intents never surface errors to the caller; failures land in the
/// snapshot's `last_error` and the caller decides whether to re-issue the
/// intent. There is no cancellation: a superseded response is still reduced
/// when it arrives, and the merge mode it carries decides how (last writer
/// wins at the reducer level).
///
/// Clones share the same snapshot channel. The channel closes when the last
/// store handle is dropped, which ends any outstanding subscriptions.
pub struct EntityStore<T: Entity> {
    rest: Arc<RestClient>,
    snapshot_tx: watch::Sender<Snapshot<T>>,
    refresh_page_size: u64,
}

impl<T: Entity> Clone for EntityStore<T> {
    fn clone(&self) -> Self {
        Self {
            rest: Arc::clone(&self.rest),
            snapshot_tx: self.snapshot_tx.clone(),
            refresh_page_size: self.refresh_page_size,
        }
    }
}

impl<T: Entity> EntityStore<T> {
    /// Create a store with an empty snapshot.
    ///
    /// `refresh_page_size` is the page size used by the implicit list reload
    /// after a successful mutation.
    pub fn new(rest: Arc<RestClient>, refresh_page_size: u64) -> Self {
        let (snapshot_tx, _) = watch::channel(Snapshot::default());
        Self {
            rest,
            snapshot_tx,
            refresh_page_size,
        }
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Snapshot<T> {
        self.snapshot_tx.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.snapshot_tx.subscribe()
    }

    fn apply(&self, event: EntityEvent<T>) {
        self.snapshot_tx
            .send_modify(|state| *state = EntityReducer::<T>::reduce(std::mem::take(state), event));
    }

    /// Fetch one page of entities and merge it per `mode`.
    pub async fn fetch_page(&self, query: PageQuery, mode: FetchMode) {
        debug!(resource = T::RESOURCE, page = query.page, ?mode, "fetching page");
        self.apply(EntityEvent::FetchPagePending);
        match self.rest.list::<T>(&query).await {
            Ok(page) => self.apply(EntityEvent::FetchPageFulfilled { page, mode }),
            Err(err) => self.reject_fetch("fetch_page", err, EntityEvent::FetchPageRejected),
        }
    }

    /// Fetch a single entity into the `focused` slot.
    pub async fn fetch_one(&self, id: EntityId) {
        debug!(resource = T::RESOURCE, id, "fetching entity");
        self.apply(EntityEvent::FetchOnePending);
        match self.rest.get_one::<T>(id).await {
            Ok(entity) => self.apply(EntityEvent::FetchOneFulfilled(entity)),
            Err(err) => self.reject_fetch("fetch_one", err, EntityEvent::FetchOneRejected),
        }
    }

    /// Create an entity. On success the snapshot focuses the server-assigned
    /// entity and the first page is reloaded before this future resolves.
    pub async fn create(&self, entity: T) {
        self.apply(EntityEvent::MutatePending);
        let result = self.rest.create(&entity).await;
        self.finish_mutation("create", result).await;
    }

    /// Full-replace update. Same post-conditions as [`create`](Self::create).
    pub async fn update(&self, entity: T) {
        self.apply(EntityEvent::MutatePending);
        let result = self.rest.update(&entity).await;
        self.finish_mutation("update", result).await;
    }

    /// Partial update; the server merges the sparse payload. Same
    /// post-conditions as [`create`](Self::create).
    pub async fn partial_update(&self, entity: T) {
        self.apply(EntityEvent::MutatePending);
        let result = self.rest.partial_update(&entity).await;
        self.finish_mutation("partial_update", result).await;
    }

    /// Delete an entity. On success `focused` is cleared and the first page
    /// is reloaded before this future resolves.
    pub async fn delete(&self, id: EntityId) {
        self.apply(EntityEvent::MutatePending);
        match self.rest.delete::<T>(id).await {
            Ok(()) => {
                self.apply(EntityEvent::DeleteFulfilled);
                self.refresh_after_mutation().await;
            }
            Err(err) => {
                warn!(resource = T::RESOURCE, error = %err, "delete failed");
                self.apply(EntityEvent::MutateRejected(err.detail()));
            }
        }
    }

    /// Return the snapshot to its initial defaults.
    pub fn reset(&self) {
        self.apply(EntityEvent::Reset);
    }

    fn reject_fetch(
        &self,
        intent: &'static str,
        err: RestError,
        event: fn(ErrorDetail) -> EntityEvent<T>,
    ) {
        warn!(resource = T::RESOURCE, intent, error = %err, "fetch failed");
        self.apply(event(err.detail()));
    }

    async fn finish_mutation(&self, intent: &'static str, result: Result<T, RestError>) {
        match result {
            Ok(saved) => {
                self.apply(EntityEvent::MutateFulfilled(saved));
                self.refresh_after_mutation().await;
            }
            Err(err) => {
                warn!(resource = T::RESOURCE, intent, error = %err, "mutation failed");
                self.apply(EntityEvent::MutateRejected(err.detail()));
            }
        }
    }

    /// Implicit first-page reload after a successful mutation.
    ///
    /// Skips the pending event on purpose: the reload must not consume the
    /// one-shot success signal the mutation just raised, and the mutation's
    /// own flag already covered the in-flight period the consumer cares
    /// about.
    async fn refresh_after_mutation(&self) {
        let query = PageQuery::first(self.refresh_page_size);
        match self.rest.list::<T>(&query).await {
            Ok(page) => self.apply(EntityEvent::FetchPageFulfilled {
                page,
                mode: FetchMode::Replace,
            }),
            Err(err) => {
                warn!(resource = T::RESOURCE, error = %err, "post-mutation refresh failed");
                self.apply(EntityEvent::FetchPageRejected(err.detail()));
            }
        }
    }
}
