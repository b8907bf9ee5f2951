//! Derived-data computations over projects and their tasks.
//!
//! # Responsibility
//! - Compute completion percentage from a project's task list.
//! - Roll project status up from task completion.
//! - Aggregate dashboard statistics across the whole collection.
//!
//! # Invariants
//! - Every function here is a pure recomputation over current state; nothing
//!   is cached or incrementally maintained.
//! - The status roll-up never runs for a project without tasks.

use crate::model::project::{Project, ProjectStatus, Reminder, Task, TaskStatus};
use chrono::NaiveDate;

/// Percentage of tasks with status `Done`, rounded half-up.
///
/// Returns 0 for an empty task list. The result is always within `[0, 100]`.
pub fn completion_percentage(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let done = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Done)
        .count();
    ((done as f64 / tasks.len() as f64) * 100.0).round() as u8
}

/// Re-derives `status` from the task list.
///
/// # Contract
/// - Empty task list: no-op, the user-assigned status stays untouched.
/// - Otherwise: `Completed` when every task is `Done`, else `InProgress`,
///   overwriting any prior status including `OnHold` and `Planned`.
///
/// The store applies this after every task mutation and never after plain
/// project edits.
pub fn roll_up_status(project: &mut Project) {
    if project.tasks.is_empty() {
        return;
    }
    let all_done = project
        .tasks
        .iter()
        .all(|task| task.status == TaskStatus::Done);
    project.status = if all_done {
        ProjectStatus::Completed
    } else {
        ProjectStatus::InProgress
    };
}

/// Aggregate counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub total_tasks: usize,
}

/// Computes the dashboard statistic tiles over the full collection.
pub fn dashboard_stats(projects: &[Project]) -> DashboardStats {
    DashboardStats {
        total_projects: projects.len(),
        in_progress: projects
            .iter()
            .filter(|project| project.status == ProjectStatus::InProgress)
            .count(),
        completed: projects
            .iter()
            .filter(|project| project.status == ProjectStatus::Completed)
            .count(),
        total_tasks: projects.iter().map(|project| project.tasks.len()).sum(),
    }
}

/// Reminders dated `today` or later, ascending by date.
///
/// Ties keep their relative order in the project's reminder list.
pub fn upcoming_reminders(project: &Project, today: NaiveDate) -> Vec<&Reminder> {
    let mut upcoming: Vec<&Reminder> = project
        .reminders
        .iter()
        .filter(|reminder| reminder.date >= today)
        .collect();
    upcoming.sort_by_key(|reminder| reminder.date);
    upcoming
}

/// Formats a calendar date for display, e.g. `Jan 20, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
