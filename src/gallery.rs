//! Explicit wiring of the per-resource stores.

use std::sync::Arc;

use crate::config::Config;
use crate::model::{Album, Photo, Tag};
use crate::rest::{RestClient, RestError};
use crate::store::EntityStore;

/// One store per resource type, sharing a single HTTP client.
///
/// Construct a `Gallery` explicitly and hand it (or individual stores, which
/// are cheap to clone) to consumers; there is no ambient global instance.
/// Dropping the last handle to a store closes its snapshot channel, ending
/// any outstanding subscriptions, so teardown is the ordinary drop order.
pub struct Gallery {
    pub albums: EntityStore<Album>,
    pub photos: EntityStore<Photo>,
    pub tags: EntityStore<Tag>,
}

impl Gallery {
    /// Build the stores from configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, RestError> {
        let rest = Arc::new(RestClient::new(&config.api)?);
        Ok(Self::with_client(rest, config.defaults.page_size))
    }

    /// Build the stores around an existing client.
    pub fn with_client(rest: Arc<RestClient>, page_size: u64) -> Self {
        Self {
            albums: EntityStore::new(Arc::clone(&rest), page_size),
            photos: EntityStore::new(Arc::clone(&rest), page_size),
            tags: EntityStore::new(rest, page_size),
        }
    }
}
