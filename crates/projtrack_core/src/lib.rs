//! Core domain logic for projtrack.
//! This crate is the single source of truth for business invariants.

pub mod data;
pub mod db;
pub mod logging;
pub mod model;
pub mod progress;
pub mod repo;
pub mod store;
pub mod view;

pub use data::demo::demo_projects;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{
    Priority, Project, ProjectId, ProjectStatus, Reminder, ReminderId, Task, TaskId, TaskStatus,
    ValidationErrors, ValidationIssue,
};
pub use progress::{
    completion_percentage, dashboard_stats, format_date, roll_up_status, upcoming_reminders,
    DashboardStats,
};
pub use repo::project_repo::{
    ProjectRepository, RepoError, RepoResult, SqliteProjectRepository,
};
pub use store::project_store::{
    ProjectDraft, ProjectStore, ReminderDraft, StoreError, TaskDraft,
};
pub use view::project_list::{filter_projects, sort_projects, ProjectFilter, SortKey};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
