// SPDX-License-Identifier: MPL-2.0
//! Media classification by file extension.
//!
//! Two separate checks live here:
//! - [`is_supported`] is the strict allow-list the tree builder applies while
//!   discovering files; anything it rejects never enters the tree.
//! - [`classify`] is total: it never fails and falls back to
//!   [`MediaKind::Image`] for names it does not recognise.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// The kinds of media the gallery can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image (PNG, JPEG, WebP).
    Image,
    /// Video clip (MP4, WebM, MOV, AVI).
    Video,
    /// Animated GIF.
    Gif,
}

impl MediaKind {
    /// Whether wheel zoom and drag panning apply to this media.
    #[must_use]
    pub fn is_zoomable(self) -> bool {
        match self {
            MediaKind::Image | MediaKind::Gif => true,
            MediaKind::Video => false,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Gif => "gif",
        }
    }
}

/// Supported media extensions (lower-case, without the dot).
pub mod extensions {
    /// Still image file extensions.
    pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

    /// Animated image file extensions.
    pub const GIF_EXTENSIONS: &[&str] = &["gif"];

    /// Video file extensions.
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "avi"];

    /// Every extension the tree builder lets through.
    pub const ALL_MEDIA_EXTENSIONS: &[&str] = &[
        "png", "jpg", "jpeg", "webp", "gif", "mp4", "webm", "mov", "avi",
    ];

    /// Extensions accepted as a tile image when probing a folder on disk.
    pub const THUMBNAIL_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];
}

/// Returns the lower-cased extension of `name`, if it has one.
fn lowercase_extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
}

/// Classifies a file name (or path) by extension.
///
/// Total over all strings: empty names and names without a recognised
/// extension are reported as [`MediaKind::Image`].
#[must_use]
pub fn classify(name: &str) -> MediaKind {
    match lowercase_extension(name) {
        Some(ext) if extensions::VIDEO_EXTENSIONS.contains(&ext.as_str()) => MediaKind::Video,
        Some(ext) if extensions::GIF_EXTENSIONS.contains(&ext.as_str()) => MediaKind::Gif,
        _ => MediaKind::Image,
    }
}

/// Checks a file name against the discovery allow-list (case-insensitive).
#[must_use]
pub fn is_supported(name: &str) -> bool {
    lowercase_extension(name)
        .is_some_and(|ext| extensions::ALL_MEDIA_EXTENSIONS.contains(&ext.as_str()))
}

/// Checks whether a file name may serve as an on-disk tile image.
#[must_use]
pub fn is_thumbnail_candidate(name: &str) -> bool {
    lowercase_extension(name)
        .is_some_and(|ext| extensions::THUMBNAIL_EXTENSIONS.contains(&ext.as_str()))
}
