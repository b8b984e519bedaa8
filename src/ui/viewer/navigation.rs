// SPDX-License-Identifier: MPL-2.0
//! Navigable sequences and wrap-around stepping.
//!
//! What next/previous cycle through depends on what was opened: a folder
//! entry steps through its `images`, a media entry steps through the media
//! entries of its category (folders skipped).

use crate::gallery::{join_public, Category, Entry};

/// Snapshot of the position inside the current navigable sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationInfo {
    /// 1-based position, for an "n / total" label.
    pub position: usize,
    /// Length of the navigable sequence.
    pub total: usize,
    /// Whether previous/next controls are offered at all.
    pub show_controls: bool,
}

impl NavigationInfo {
    #[must_use]
    pub fn new(index: usize, total: usize) -> Self {
        Self {
            position: index + 1,
            total,
            show_controls: total > 1,
        }
    }
}

/// The media paths `entry` makes navigable within `category`.
#[must_use]
pub fn sequence(category: &Category, entry: &Entry) -> Vec<String> {
    if entry.is_folder() {
        let folder = join_public(&category.path, &entry.name);
        entry
            .images()
            .iter()
            .map(|image| join_public(&folder, image))
            .collect()
    } else {
        category
            .media_entries()
            .map(|media| media.path.clone())
            .collect()
    }
}

/// Starting index when `entry` is opened: 0 for folders, otherwise the
/// entry's position among the category's media entries.
#[must_use]
pub fn start_index(category: &Category, entry: &Entry) -> Option<usize> {
    if entry.is_folder() {
        return Some(0);
    }
    category.media_entries().position(|media| media == entry)
}

/// Steps forward with wrap-around. Sequences of length 0 or 1 stay put.
#[must_use]
pub fn wrap_next(index: usize, len: usize) -> usize {
    if len <= 1 {
        return index;
    }
    (index + 1) % len
}

/// Steps backward with wrap-around. Sequences of length 0 or 1 stay put.
#[must_use]
pub fn wrap_prev(index: usize, len: usize) -> usize {
    if len <= 1 {
        return index;
    }
    (index + len - 1) % len
}
