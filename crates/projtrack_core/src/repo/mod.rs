//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the load/save contract for the durable project collection.
//! - Isolate SQLite details from store/business orchestration.
//!
//! # Invariants
//! - `save` followed by `load` reproduces an equal collection.
//! - Repository APIs return semantic errors (`InvalidData`) in addition to
//!   DB transport errors.

pub mod project_repo;
