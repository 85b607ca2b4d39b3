use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::model::{Entity, EntityId};

/// An album grouping photos, owned by a backend user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Album {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        with = "time::serde::rfc3339::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,
}

/// Identity-key reference to the owning user.
///
/// `login` is display-only: the backend resolves the relationship from `id`
/// alone, so it is stripped from outbound payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    #[serde(skip_serializing, default)]
    pub login: Option<String>,
}

impl Entity for Album {
    const RESOURCE: &'static str = "albums";

    fn id(&self) -> Option<EntityId> {
        self.id
    }
}
