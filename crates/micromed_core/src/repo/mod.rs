//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep storage details out of service orchestration.
//!
//! # Invariants
//! - Storage is in-memory only and lost with the repository instance.

pub mod note_repo;
