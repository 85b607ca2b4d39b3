//! Reducer trait and the generic entity reducer.

use std::marker::PhantomData;

use crate::model::Entity;
use crate::store::event::{EntityEvent, StoreEvent};
use crate::store::merge::merge_page;
use crate::store::state::{Snapshot, StoreState};

/// Reducer transforms state based on events.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Event) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The event type this reducer handles.
    type Event: StoreEvent;

    /// Process an event and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, event: Self::Event) -> Self::State;
}

/// Generic reducer instantiated once per entity type.
pub struct EntityReducer<T>(PhantomData<T>);

impl<T: Entity> Reducer for EntityReducer<T> {
    type State = Snapshot<T>;
    type Event = EntityEvent<T>;

    fn reduce(mut state: Self::State, event: Self::Event) -> Self::State {
        match event {
            // Every new intent clears the one-shot success signal and the
            // previous error; a fetch never touches the mutation flag and
            // vice versa, so concurrent intents stay independent.
            EntityEvent::FetchPagePending | EntityEvent::FetchOnePending => {
                state.loading = true;
                state.update_succeeded = false;
                state.last_error = None;
                state
            }
            EntityEvent::MutatePending => {
                state.updating = true;
                state.update_succeeded = false;
                state.last_error = None;
                state
            }

            EntityEvent::FetchPageFulfilled { page, mode } => {
                state.loading = false;
                state.items = merge_page(std::mem::take(&mut state.items), page.items, mode);
                if let Some(total) = page.total_count {
                    state.total_count = total;
                }
                state.links = page.links;
                state
            }
            EntityEvent::FetchOneFulfilled(entity) => {
                state.loading = false;
                state.focused = Some(entity);
                state
            }
            EntityEvent::MutateFulfilled(entity) => {
                state.updating = false;
                state.loading = false;
                state.update_succeeded = true;
                state.focused = Some(entity);
                state
            }
            EntityEvent::DeleteFulfilled => {
                state.updating = false;
                state.update_succeeded = true;
                state.focused = None;
                state
            }

            // Failures never discard loaded items or the focused entity.
            EntityEvent::FetchPageRejected(error) | EntityEvent::FetchOneRejected(error) => {
                state.loading = false;
                state.last_error = Some(error);
                state
            }
            EntityEvent::MutateRejected(error) => {
                state.updating = false;
                state.last_error = Some(error);
                state
            }

            EntityEvent::Reset => Snapshot::default(),
        }
    }
}
