// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning magnified media.

use crate::ui::geometry::Point;

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Pointer position at drag start minus the pan offset at that moment
    pub anchor: Option<Point>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, pointer: Point, pan: Point) {
        self.is_dragging = true;
        self.anchor = Some(pointer - pan);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.anchor = None;
    }

    /// Calculates the unclamped pan offset for the current pointer position
    #[must_use]
    pub fn pan_for(&self, pointer: Point) -> Option<Point> {
        if !self.is_dragging {
            return None;
        }
        let anchor = self.anchor?;
        Some(pointer - anchor)
    }
}
