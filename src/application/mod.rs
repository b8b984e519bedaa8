// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! - [`port`]: Trait definitions (interfaces) the host environment implements
//!
//! The viewer state machine only talks to its surroundings through these
//! ports, so it can be driven from a terminal, a test, or a real page.

pub mod port;
