//! Snapshot state for an entity store.

use crate::model::Entity;
use crate::rest::{ErrorDetail, PageLinks};

/// Marker trait for store state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything a consumer needs to render)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}

/// The complete observable state of one entity type's store.
///
/// Created with empty defaults, mutated only by the reducer in response to
/// lifecycle events, and returned to defaults by the reset intent.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    /// Loaded page(s), in server response order except where the append
    /// merge rule introduces new entries at the tail.
    pub items: Vec<T>,
    /// The entity currently being viewed or edited, if any.
    pub focused: Option<T>,
    /// True while a list or detail fetch is outstanding.
    pub loading: bool,
    /// True while a create/update/delete is outstanding.
    pub updating: bool,
    /// One-shot signal: a mutation completed successfully and no new intent
    /// has begun since.
    pub update_succeeded: bool,
    /// Server-reported total matching items, independent of what is loaded.
    pub total_count: u64,
    /// Link-relation metadata from the latest list response.
    pub links: PageLinks,
    /// Uniform description of the most recent failure, if any.
    pub last_error: Option<ErrorDetail>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            focused: None,
            loading: false,
            updating: false,
            update_succeeded: false,
            total_count: 0,
            links: PageLinks::default(),
            last_error: None,
        }
    }
}

impl<T: Entity> StoreState for Snapshot<T> {}

impl<T: Entity> Snapshot<T> {
    /// Whether more pages exist beyond `current_page`, per the server's
    /// link-relation metadata.
    pub fn has_next_page(&self, current_page: u64) -> bool {
        self.links.has_next(current_page)
    }
}
