//! Resource types exchanged with the gallery backend.
//!
//! Every resource implements [`Entity`], which ties a Rust type to its REST
//! path segment and exposes its server-assigned identity key. Relationship
//! fields are id-only reference structs: display fields deserialize for
//! convenience but are never serialized back, so outbound payloads carry
//! identity-key references instead of nested objects.

mod album;
mod photo;
mod tag;

pub use album::{Album, UserRef};
pub use photo::{AlbumRef, Photo};
pub use tag::{PhotoRef, Tag, TagRef};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Server-assigned identity key.
pub type EntityId = i64;

/// A resource type managed by an entity store.
///
/// `Default` produces the "empty" value used for unset `focused` slots and
/// for building create payloads field by field.
pub trait Entity:
    Clone + std::fmt::Debug + PartialEq + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Path segment under `/api`, e.g. `albums`.
    const RESOURCE: &'static str;

    /// Identity key, if the entity has been persisted.
    fn id(&self) -> Option<EntityId>;
}
