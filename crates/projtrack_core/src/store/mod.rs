//! In-memory project store and its durable mirror.
//!
//! # Responsibility
//! - Hold the authoritative project collection for the session.
//! - Expose the only write path for projects, tasks and reminders.
//!
//! # Invariants
//! - Every committed mutation is followed by a full-snapshot save.
//! - The in-memory collection stays authoritative even when a save fails.

pub mod project_store;
