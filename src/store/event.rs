//! Lifecycle events reduced into snapshots.

use crate::model::Entity;
use crate::rest::{ErrorDetail, Page};
use crate::store::merge::FetchMode;

/// Marker trait for events processed by a reducer.
///
/// Events represent:
/// - Intent lifecycle transitions (pending/fulfilled/rejected)
/// - Explicit consumer actions (reset)
pub trait StoreEvent: Send + 'static {}

/// Lifecycle events for the six entity intents.
///
/// The three mutation intents (create, full update, partial update) share
/// one event shape: their effect on the snapshot is identical, only the
/// HTTP verb differs. Delete gets its own fulfilled event because it clears
/// `focused` instead of replacing it.
#[derive(Debug, Clone)]
pub enum EntityEvent<T> {
    FetchPagePending,
    /// A page response, tagged with the fetch mode chosen at dispatch time.
    /// The mode rides with the response so a late arrival merges by its own
    /// mode, never by arrival order.
    FetchPageFulfilled { page: Page<T>, mode: FetchMode },
    FetchPageRejected(ErrorDetail),

    FetchOnePending,
    FetchOneFulfilled(T),
    FetchOneRejected(ErrorDetail),

    MutatePending,
    MutateFulfilled(T),
    DeleteFulfilled,
    MutateRejected(ErrorDetail),

    Reset,
}

impl<T: Entity> StoreEvent for EntityEvent<T> {}
