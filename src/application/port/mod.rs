// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`scroll`]: Background scroll locking of the host page
//!
//! # Example
//!
//! ```ignore
//! use gallery_lens::application::port::ScrollSurface;
//!
//! struct Page;
//! impl ScrollSurface for Page {
//!     fn set_background_scroll_locked(&self, locked: bool) { /* ... */ }
//! }
//! ```

pub mod scroll;

// Re-export main types for convenience
pub use scroll::ScrollSurface;
