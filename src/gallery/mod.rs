// SPDX-License-Identifier: MPL-2.0
//! The gallery content model.
//!
//! A gallery is an ordered list of [`Category`] tiles. Each category holds
//! [`Entry`] items which are either media files or folder references that
//! carry one more level of file names.
//!
//! The serialized shape matches the JSON the gallery endpoint exposes:
//! `[{name, path, items: [{name, type, path, images?}]}]`.

pub mod builder;
pub mod thumbnail;

pub use builder::{build, GalleryBuilder};
pub use thumbnail::{disk_thumbnail, folder_cover, ThumbnailResolver};

use crate::media::MediaKind;
use serde::{Deserialize, Serialize};

/// What an [`Entry`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    Image,
    Video,
    Gif,
}

impl EntryKind {
    /// Returns the media kind, or `None` for folders.
    #[must_use]
    pub fn media(self) -> Option<MediaKind> {
        match self {
            EntryKind::Folder => None,
            EntryKind::Image => Some(MediaKind::Image),
            EntryKind::Video => Some(MediaKind::Video),
            EntryKind::Gif => Some(MediaKind::Gif),
        }
    }

    #[must_use]
    pub fn is_media(self) -> bool {
        self.media().is_some()
    }
}

impl From<MediaKind> for EntryKind {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Image => EntryKind::Image,
            MediaKind::Video => EntryKind::Video,
            MediaKind::Gif => EntryKind::Gif,
        }
    }
}

/// One item inside a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub path: String,
    /// File names one level deeper; only present on folder entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl Entry {
    /// Creates a media entry; the kind comes from the file extension.
    #[must_use]
    pub fn media(name: impl Into<String>, path: impl Into<String>) -> Self {
        let name = name.into();
        let kind = crate::media::classify(&name).into();
        Self {
            name,
            kind,
            path: path.into(),
            images: None,
        }
    }

    /// Creates a folder entry holding the given (already sorted) file names.
    #[must_use]
    pub fn folder(name: impl Into<String>, path: impl Into<String>, images: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Folder,
            path: path.into(),
            images: Some(images),
        }
    }

    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    /// Folder images, empty for media entries.
    #[must_use]
    pub fn images(&self) -> &[String] {
        self.images.as_deref().unwrap_or(&[])
    }
}

/// One top-level browsable unit, rendered as a grid tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub path: String,
    #[serde(rename = "items")]
    pub entries: Vec<Entry>,
}

impl Category {
    /// Entries that are media (not folders), in order.
    pub fn media_entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.kind.is_media())
    }

    /// The single media entry shown directly when the category is opened,
    /// if the category consists of exactly one media entry.
    #[must_use]
    pub fn sole_media(&self) -> Option<&Entry> {
        match self.entries.as_slice() {
            [only] if only.kind.is_media() => Some(only),
            _ => None,
        }
    }
}

/// Joins public path segments with forward slashes.
pub(crate) fn join_public(base: &str, segment: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_with_type_key_and_optional_images() {
        let media = Entry::media("a.gif", "/pics/x/y/a.gif");
        let json = serde_json::to_value(&media).expect("serialize entry");
        assert_eq!(json["type"], "gif");
        assert!(json.get("images").is_none());

        let folder = Entry::folder("sub", "/pics/x/y/sub", vec!["1.png".into()]);
        let json = serde_json::to_value(&folder).expect("serialize folder");
        assert_eq!(json["type"], "folder");
        assert_eq!(json["images"][0], "1.png");
    }

    #[test]
    fn category_uses_items_key() {
        let json = r#"[{"name":"Set","path":"/pics/m/Set","items":[
            {"name":"a.png","type":"image","path":"/pics/m/Set/a.png"},
            {"name":"sub","type":"folder","path":"/pics/m/Set/sub","images":["z.png"]}
        ]}]"#;
        let parsed: Vec<Category> = serde_json::from_str(json).expect("parse gallery");

        assert_eq!(parsed[0].entries.len(), 2);
        assert_eq!(parsed[0].entries[1].images(), ["z.png".to_string()]);
        assert_eq!(parsed[0].entries[0].images(), &[] as &[String]);
    }

    #[test]
    fn sole_media_requires_exactly_one_media_entry() {
        let single = Category {
            name: "clip".into(),
            path: "/pics/renders".into(),
            entries: vec![Entry::media("clip.mp4", "/pics/renders/clip.mp4")],
        };
        assert!(single.sole_media().is_some());

        let folder_only = Category {
            name: "Set".into(),
            path: "/pics/m/Set".into(),
            entries: vec![Entry::folder("sub", "/pics/m/Set/sub", vec![])],
        };
        assert!(folder_only.sole_media().is_none());
    }

    #[test]
    fn join_public_avoids_double_slash() {
        assert_eq!(join_public("/pics/", "a"), "/pics/a");
        assert_eq!(join_public("/pics", "a"), "/pics/a");
    }
}
