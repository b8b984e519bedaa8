// SPDX-License-Identifier: MPL-2.0
//! Scroll surface port definition.
//!
//! The viewer locks scrolling of whatever sits behind it while a single
//! media item (or an auto-expanded folder) is on screen. What "locking"
//! means is up to the host: a page sets `overflow: hidden`, a terminal
//! driver just logs it.

/// Host surface whose background scrolling can be switched off.
///
/// Takes `&self` so one surface can be shared between the viewer and its
/// host; implementors use interior mutability if they keep state.
pub trait ScrollSurface {
    /// Enables (`true`) or releases (`false`) the background scroll lock.
    fn set_background_scroll_locked(&self, locked: bool);
}

#[cfg(test)]
pub(crate) use recording::RecordingSurface;
