//! Navigation stack and route parameter extraction.
//!
//! # Responsibility
//! - Keep the back stack of visited routes with `home` as its root.
//! - Hand route parameters (topic, date) to the screens that consume them.

pub mod router;
