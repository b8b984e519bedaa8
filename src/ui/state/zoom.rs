// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan state management
//!
//! This module handles the magnification of the current media and the pan
//! offset that goes with it:
//! - Zoom factor bounded to `[0.5, 3.0]`, changed in `0.1` wheel steps
//! - Pan offset, reset whenever the zoom drops to 1x or below
//! - Pan clamping so the magnified media never leaves the container

use crate::config::{DEFAULT_ZOOM_FACTOR, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR, ZOOM_WHEEL_STEP};
use crate::ui::geometry::{Point, Size};

/// Zoom factor, guaranteed to be within valid range (0.5x–3.0x).
///
/// Values are kept on a hundredth grid so that repeated wheel steps do not
/// accumulate floating-point drift (ten steps in and ten out land exactly on
/// 1.0 again).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a new zoom factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        let snapped = (factor * 100.0).round() / 100.0;
        Self(snapped.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether the media is shown larger than its fitted size.
    #[must_use]
    pub fn is_magnified(self) -> bool {
        self.0 > 1.0
    }

    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 + ZOOM_WHEEL_STEP)
    }

    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 - ZOOM_WHEEL_STEP)
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_FACTOR)
    }
}

/// Largest pan offset per axis for a zoom factor and container size.
///
/// Zero on both axes when the media is not magnified.
#[must_use]
pub fn max_pan(factor: ZoomFactor, container: Size) -> Point {
    let overflow = (factor.value() - 1.0).max(0.0);
    Point::new(
        (container.width * overflow / 2.0).max(0.0),
        (container.height * overflow / 2.0).max(0.0),
    )
}

/// Clamps `pan` into `±max_pan` on each axis.
#[must_use]
pub fn clamp_pan(pan: Point, factor: ZoomFactor, container: Size) -> Point {
    let max = max_pan(factor, container);
    Point::new(pan.x.clamp(-max.x, max.x), pan.y.clamp(-max.y, max.y))
}

/// Zoom factor plus pan offset of the media currently on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoomState {
    pub factor: ZoomFactor,
    pub pan: Point,
}

impl ZoomState {
    /// Back to 1x, centred.
    pub fn reset(&mut self) {
        self.factor = ZoomFactor::default();
        self.pan = Point::ORIGIN;
    }

    /// Applies one wheel notch.
    ///
    /// A positive `delta_y` (scrolling down) zooms out, anything else zooms in.
    /// At 1x or below the pan is recentred; above it the current pan is
    /// clamped to the new bounds when the container size is known.
    pub fn on_wheel(&mut self, delta_y: f32, container: Option<Size>) {
        self.factor = if delta_y > 0.0 {
            self.factor.zoom_out()
        } else {
            self.factor.zoom_in()
        };

        if !self.factor.is_magnified() {
            self.pan = Point::ORIGIN;
        } else if let Some(container) = container {
            self.pan = clamp_pan(self.pan, self.factor, container);
        }
    }

    /// Sets the pan offset, clamped to the container.
    pub fn set_pan(&mut self, pan: Point, container: Size) {
        self.pan = clamp_pan(pan, self.factor, container);
    }

    /// Re-applies the clamp, e.g. after the container was resized.
    pub fn reclamp(&mut self, container: Size) {
        if self.factor.is_magnified() {
            self.pan = clamp_pan(self.pan, self.factor, container);
        } else {
            self.pan = Point::ORIGIN;
        }
    }
}
