// SPDX-License-Identifier: MPL-2.0
//! Tile image selection.
//!
//! [`ThumbnailResolver`] picks the image shown on a category's grid tile from
//! the already-built tree. [`disk_thumbnail`] answers the same question by
//! probing a folder on disk instead.

use super::{join_public, Category, Entry, EntryKind};
use crate::config::{GalleryConfig, DEFAULT_PLACEHOLDER, DEFAULT_THUMBNAIL_NAME};
use crate::media;
use std::fs;
use std::path::Path;

/// Picks a representative media reference for a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailResolver {
    thumbnail_name: String,
    placeholder: String,
}

impl Default for ThumbnailResolver {
    fn default() -> Self {
        Self {
            thumbnail_name: DEFAULT_THUMBNAIL_NAME.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl ThumbnailResolver {
    #[must_use]
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self {
            thumbnail_name: config.thumbnail_name.clone(),
            placeholder: config.placeholder.clone(),
        }
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Resolves the tile image, first match wins:
    ///
    /// 1. an image or gif entry named like the thumbnail file (`thumb.png`)
    /// 2. the first media entry of any kind
    /// 3. the first image of the first folder entry that has any
    /// 4. the placeholder
    #[must_use]
    pub fn resolve(&self, category: &Category) -> String {
        let named_thumb = category.entries.iter().find(|entry| {
            matches!(entry.kind, EntryKind::Image | EntryKind::Gif)
                && entry.name == self.thumbnail_name
        });
        if let Some(entry) = named_thumb {
            return entry.path.clone();
        }

        if let Some(entry) = category.media_entries().next() {
            return entry.path.clone();
        }

        category
            .entries
            .iter()
            .find_map(|entry| folder_cover(category, entry))
            .unwrap_or_else(|| self.placeholder.clone())
    }

    /// Same as [`disk_thumbnail`] with this resolver's thumbnail name, falling
    /// back to the placeholder.
    #[must_use]
    pub fn resolve_on_disk(&self, public_root: &Path, folder_path: &str) -> String {
        disk_thumbnail(public_root, folder_path, &self.thumbnail_name)
            .unwrap_or_else(|| self.placeholder.clone())
    }
}

/// Cover image of a folder entry: `{category.path}/{entry.name}/{images[0]}`.
///
/// Returns `None` for media entries and for folders without images.
#[must_use]
pub fn folder_cover(category: &Category, entry: &Entry) -> Option<String> {
    if !entry.is_folder() {
        return None;
    }
    let first = entry.images().first()?;
    let folder = join_public(&category.path, &entry.name);
    Some(join_public(&folder, first))
}

/// Looks for a tile image for `folder_path` (a public path such as
/// `/pics/models/Set A`) inside `public_root` on disk.
///
/// Prefers a file called `thumbnail_name`, then the first image or gif file
/// in directory-listing order. Videos are never chosen. Returns `None` when
/// the folder does not exist, cannot be read, or holds no candidate.
#[must_use]
pub fn disk_thumbnail(
    public_root: &Path,
    folder_path: &str,
    thumbnail_name: &str,
) -> Option<String> {
    let relative = folder_path.trim_start_matches('/');
    let dir = public_root.join(relative);
    if !dir.exists() {
        return None;
    }

    if dir.join(thumbnail_name).is_file() {
        return Some(join_public(folder_path, thumbnail_name));
    }

    let listing = match fs::read_dir(&dir) {
        Ok(listing) => listing,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "failed to read thumbnail folder");
            return None;
        }
    };

    listing
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .find(|name| media::is_thumbnail_candidate(name))
        .map(|name| join_public(folder_path, &name))
}
