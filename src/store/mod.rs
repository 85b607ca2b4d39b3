//! Entity state store: snapshot, lifecycle events, reducer, async engine.
//!
//! Implements unidirectional data flow between the REST backend and
//! snapshot consumers.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ pending event ──→ Reducer ──→ Snapshot ──→ Consumer
//!    │                            ↑                        │
//!    └──→ REST call ──→ fulfilled/rejected event           │
//!                                                          │
//!         next intent ←────────────────────────────────────┘
//! ```
//!
//! - **Snapshot**: immutable view of one entity type's state
//! - **EntityEvent**: pending/fulfilled/rejected intent lifecycle
//! - **Reducer**: pure function that transforms snapshots
//! - **EntityStore**: async engine dispatching intents and publishing
//!   snapshots over a watch channel

mod engine;
mod event;
mod merge;
mod reducer;
mod state;

pub use engine::EntityStore;
pub use event::{EntityEvent, StoreEvent};
pub use merge::{merge_page, FetchMode};
pub use reducer::{EntityReducer, Reducer};
pub use state::{Snapshot, StoreState};
