//! Flutter bridge for the Micro Meditation core.

pub mod api;
