// SPDX-License-Identifier: MPL-2.0
//! Interactive viewer state.
//!
//! Nothing in here draws anything: the host renders from the viewer
//! [`State`](viewer::State) and feeds user input back as
//! [`Message`](viewer::Message)s.

pub mod geometry;
pub mod state;
pub mod viewer;
