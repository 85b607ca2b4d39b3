use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::model::tag::TagRef;
use crate::model::{Entity, EntityId};

/// A photo with its binary image payload and relationship references.
///
/// The image travels base64-encoded in the JSON body; `image_content_type`
/// carries the MIME type alongside it, mirroring how the backend splits the
/// blob from its metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "base64_blob", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(
        with = "time::serde::rfc3339::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub taken: Option<OffsetDateTime>,
    #[serde(
        with = "time::serde::rfc3339::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub uploaded: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<AlbumRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagRef>,
}

/// Identity-key reference to the containing album.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumRef {
    pub id: EntityId,
    #[serde(skip_serializing, default)]
    pub title: Option<String>,
}

impl Entity for Photo {
    const RESOURCE: &'static str = "photos";

    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

/// Base64 (de)serialization for the image blob field.
mod base64_blob {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &Option<Vec<u8>>, ser: S) -> Result<S::Ok, S::Error> {
        match bytes {
            Some(bytes) => ser.serialize_str(&STANDARD.encode(bytes)),
            None => ser.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(de)?;
        encoded
            .map(|s| STANDARD.decode(s.as_bytes()).map_err(serde::de::Error::custom))
            .transpose()
    }
}
