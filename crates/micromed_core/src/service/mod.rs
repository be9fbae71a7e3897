//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls and timer tasks into use-case APIs.
//! - Keep UI/FFI layers decoupled from storage and runtime details.

pub mod meditation_session;
pub mod note_service;
