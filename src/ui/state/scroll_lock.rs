// SPDX-License-Identifier: MPL-2.0
//! Background scroll lock
//!
//! While media is shown over the page, the page underneath must not scroll.
//! [`ScrollLock`] is the guard for that: acquiring it locks the
//! [`ScrollSurface`], dropping it unlocks, whichever way the owner goes away.

use crate::application::port::ScrollSurface;
use std::fmt;
use std::rc::Rc;

pub struct ScrollLock {
    surface: Rc<dyn ScrollSurface>,
}

impl ScrollLock {
    /// Locks background scrolling until the returned guard is dropped.
    #[must_use]
    pub fn acquire(surface: Rc<dyn ScrollSurface>) -> Self {
        surface.set_background_scroll_locked(true);
        Self { surface }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.surface.set_background_scroll_locked(false);
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::scroll::RecordingSurface;

    #[test]
    fn guard_locks_then_unlocks_on_drop() {
        let surface = Rc::new(RecordingSurface::default());
        let lock = ScrollLock::acquire(surface.clone());
        assert!(surface.is_locked());

        drop(lock);
        assert!(!surface.is_locked());
        assert_eq!(surface.transitions(), 2);
    }
}
