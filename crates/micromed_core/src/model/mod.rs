//! Domain model for the meditation app core.
//!
//! # Responsibility
//! - Define plain data shapes shared by router, timer, notes and shell.
//! - Keep every type free of UI toolkit and runtime concerns.

pub mod route;
pub mod settings;
pub mod timer;
pub mod topic;
