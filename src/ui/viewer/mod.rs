// SPDX-License-Identifier: MPL-2.0
//! Media viewer: grid, open category and single item, with zoom and pan.

pub mod component;
pub mod navigation;

pub use component::{CursorHint, Effect, Key, Message, State, ViewLevel};
pub use navigation::NavigationInfo;
