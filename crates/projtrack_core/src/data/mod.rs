//! Bundled seed data.
//!
//! # Responsibility
//! - Provide the demo collection used when the durable store has no saved
//!   state yet.

pub mod demo;
