// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the live size of the container the media is displayed in. Pan
//! bounds are derived from it, so every clamp uses the latest measurement.

use crate::ui::geometry::Size;

/// Manages the measured container size
#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    /// Current container size, `None` until the host has measured it
    pub container: Option<Size>,
}

impl ViewportState {
    /// Records a new measurement. Returns true if the size changed.
    pub fn update(&mut self, size: Size) -> bool {
        let changed = self.container != Some(size);
        self.container = Some(size);
        changed
    }
}
