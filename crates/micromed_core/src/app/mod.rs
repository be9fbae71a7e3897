//! Screen-level composition of router, notes, settings and sessions.
//!
//! # Responsibility
//! - Bind screen-scoped state to the route on top of the stack.
//! - Expose one view model per screen for the hosting UI.

pub mod screen;
pub mod shell;
