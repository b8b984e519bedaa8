// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` turns a directory of images, GIFs and short videos into a
//! browsable gallery.
//!
//! - [`gallery`] builds the category tree from disk and picks tile images
//! - [`ui::viewer`] is the interactive state machine: grid, open category,
//!   single item with zoom, pan and fullscreen
//! - [`remote`] fetches the same tree from a gallery endpoint

pub mod application;
pub mod cli;
pub mod config;
pub mod error;
pub mod gallery;
pub mod logging;
pub mod media;
pub mod remote;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
