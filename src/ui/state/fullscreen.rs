// SPDX-License-Identifier: MPL-2.0
//! Fullscreen mirror
//!
//! The platform owns the real fullscreen state. This struct only mirrors it:
//! requests flip the flag optimistically and [`FullscreenState::sync`]
//! overwrites it with whatever the platform reports afterwards.

/// Request the host should forward to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter,
    Exit,
}

#[derive(Debug, Clone, Default)]
pub struct FullscreenState {
    active: bool,
}

impl FullscreenState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flips the mirrored flag and returns the matching platform request.
    pub fn toggle(&mut self) -> FullscreenRequest {
        self.active = !self.active;
        if self.active {
            FullscreenRequest::Enter
        } else {
            FullscreenRequest::Exit
        }
    }

    /// Leaves fullscreen if engaged.
    pub fn exit(&mut self) -> Option<FullscreenRequest> {
        if self.active {
            self.active = false;
            Some(FullscreenRequest::Exit)
        } else {
            None
        }
    }

    /// Adopts the platform's actual state. Returns true if the mirror was wrong.
    pub fn sync(&mut self, platform_active: bool) -> bool {
        let drifted = self.active != platform_active;
        if drifted {
            tracing::debug!(
                mirrored = self.active,
                platform = platform_active,
                "resynchronising fullscreen flag"
            );
        }
        self.active = platform_active;
        drifted
    }
}
