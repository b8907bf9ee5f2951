//! Filtering and sorting of the dashboard project list.
//!
//! # Responsibility
//! - Apply search text and categorical filters over the collection.
//! - Order the filtered result by one of the supported sort keys.
//!
//! # Invariants
//! - Filtering preserves the relative order of its input.
//! - Sorting is stable: equal keys keep their input order, so sorting an
//!   already-sorted list is a no-op.
//! - Filter first, then sort the filtered result.

use crate::model::project::{Priority, Project, ProjectStatus};

/// Filter parameters for the project list.
///
/// `None` on a categorical filter means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Case-insensitive substring matched against name and description.
    /// Empty text matches every project.
    pub search: String,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
}

/// Sort order for the project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive lexicographic ascending on `name`.
    Name,
    /// Ascending by `end_date`; projects without one sort last.
    DueDate,
    /// `High`, then `Medium`, then `Low`.
    Priority,
}

/// Selects the projects matching every active filter, preserving input order.
pub fn filter_projects(projects: &[Project], filter: &ProjectFilter) -> Vec<Project> {
    let needle = filter.search.to_lowercase();

    projects
        .iter()
        .filter(|project| {
            let matches_search = needle.is_empty()
                || project.name.to_lowercase().contains(&needle)
                || project.description.to_lowercase().contains(&needle);
            let matches_status = filter
                .status
                .map_or(true, |status| project.status == status);
            let matches_priority = filter
                .priority
                .map_or(true, |priority| project.priority == priority);
            matches_search && matches_status && matches_priority
        })
        .cloned()
        .collect()
}

/// Orders a project list by the given key.
///
/// The underlying sort is stable, so the operation is deterministic and
/// idempotent for any fixed key.
pub fn sort_projects(mut projects: Vec<Project>, key: SortKey) -> Vec<Project> {
    match key {
        SortKey::Name => projects.sort_by_key(|project| project.name.to_lowercase()),
        // Missing due dates order after every real date.
        SortKey::DueDate => {
            projects.sort_by_key(|project| (project.end_date.is_none(), project.end_date))
        }
        SortKey::Priority => projects.sort_by_key(|project| project.priority.rank()),
    }
    projects
}
