// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the viewer's state pieces separated from the viewer
//! component itself, following the principle of separation of concerns.

pub mod drag;
pub mod fullscreen;
pub mod scroll_lock;
pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use fullscreen::{FullscreenRequest, FullscreenState};
pub use scroll_lock::ScrollLock;
pub use viewport::ViewportState;
pub use zoom::{ZoomFactor, ZoomState};
