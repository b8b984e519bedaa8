// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Media root, public prefix, reserved flat-mode category
//! - **Zoom**: Zoom factor bounds and wheel step
//! - **Remote**: Default endpoint for the remote gallery fetch

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Directory (relative to the working directory) holding the media tree.
pub const DEFAULT_MEDIA_ROOT: &str = "public/pics";

/// Public URL prefix every emitted path starts with.
pub const DEFAULT_PUBLIC_PREFIX: &str = "/pics";

/// Top-level directory name that is structured in flat mode.
pub const DEFAULT_FLAT_CATEGORY: &str = "renders";

/// Media reference used when a category has nothing to show.
pub const DEFAULT_PLACEHOLDER: &str = "/placeholder.png";

/// File name that, when present in a category, is always its tile image.
pub const DEFAULT_THUMBNAIL_NAME: &str = "thumb.png";

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor when media is first shown (1.0 = fitted size).
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.0;

/// Minimum allowed zoom factor.
pub const MIN_ZOOM_FACTOR: f32 = 0.5;

/// Maximum allowed zoom factor.
pub const MAX_ZOOM_FACTOR: f32 = 3.0;

/// Zoom change per wheel notch.
pub const ZOOM_WHEEL_STEP: f32 = 0.1;

// ==========================================================================
// Remote Defaults
// ==========================================================================

/// Endpoint serving the JSON gallery tree.
pub const DEFAULT_REMOTE_ENDPOINT: &str = "http://localhost:3000/api/gallery";

/// Query parameter restricting the remote tree to one top-level category.
pub const REMOTE_FOLDER_PARAM: &str = "folder";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ZOOM_FACTOR > 0.0);
    assert!(MIN_ZOOM_FACTOR < DEFAULT_ZOOM_FACTOR);
    assert!(MAX_ZOOM_FACTOR > DEFAULT_ZOOM_FACTOR);
    assert!(ZOOM_WHEEL_STEP > 0.0);
    assert!(ZOOM_WHEEL_STEP < MAX_ZOOM_FACTOR - MIN_ZOOM_FACTOR);
};
