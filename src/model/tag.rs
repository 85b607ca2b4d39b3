use serde::{Deserialize, Serialize};

use crate::model::{Entity, EntityId};

/// A free-form tag applied to photos.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Inverse side of the photo/tag relationship; sent as id references.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<PhotoRef>,
}

/// Identity-key reference to a tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRef {
    pub id: EntityId,
    #[serde(skip_serializing, default)]
    pub name: Option<String>,
}

/// Identity-key reference to a photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRef {
    pub id: EntityId,
    #[serde(skip_serializing, default)]
    pub title: Option<String>,
}

impl Entity for Tag {
    const RESOURCE: &'static str = "tags";

    fn id(&self) -> Option<EntityId> {
        self.id
    }
}
