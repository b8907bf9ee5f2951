//! View-list computation over the project collection.
//!
//! # Responsibility
//! - Turn the full in-memory collection plus the user's filter/sort choices
//!   into the ordered list the dashboard renders.
//!
//! # Invariants
//! - Filtering and sorting are pure recomputations; the store is never
//!   mutated from here.

pub mod project_list;
