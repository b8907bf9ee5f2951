//! Demo project dataset.
//!
//! # Invariants
//! - Ids are fixed so repeated seeding yields an identical collection.
//! - The collection passes `Project::validate` and the status of every
//!   project with tasks matches the roll-up rule.

use crate::model::project::{
    Priority, Project, ProjectStatus, Reminder, Task, TaskStatus,
};
use chrono::NaiveDate;
use uuid::Uuid;

/// Returns the bundled demo collection: two sample projects with tasks and
/// reminders.
pub fn demo_projects() -> Vec<Project> {
    vec![
        sample_project(
            1,
            "Website Redesign",
            date(2025, 3, 15),
            Priority::High,
        ),
        sample_project(
            2,
            "Mobile Redesign",
            date(2025, 3, 17),
            Priority::Low,
        ),
    ]
}

fn sample_project(seed: u128, name: &str, end_date: NaiveDate, priority: Priority) -> Project {
    Project {
        id: Uuid::from_u128(seed),
        name: name.to_string(),
        description: "Complete overhaul of company website".to_string(),
        start_date: Some(date(2025, 1, 1)),
        end_date: Some(end_date),
        status: ProjectStatus::InProgress,
        priority,
        manager: "John Doe".to_string(),
        assignees: vec![
            "John Doe".to_string(),
            "Jane Smith".to_string(),
            "Mike Johnson".to_string(),
        ],
        tasks: vec![
            sample_task(seed, 1, "Design UI", "Jane Smith", TaskStatus::Done),
            sample_task(seed, 2, "Frontend", "Mike Johnson", TaskStatus::InProgress),
        ],
        reminders: vec![Reminder::with_id(
            Uuid::from_u128(seed << 64 | 0xff),
            date(2025, 1, 20),
            "Design Review",
        )],
    }
}

fn sample_task(
    project_seed: u128,
    task_seed: u128,
    name: &str,
    assignee: &str,
    status: TaskStatus,
) -> Task {
    let mut task = Task::with_id(
        Uuid::from_u128(project_seed << 64 | task_seed),
        name,
        assignee,
    );
    task.status = status;
    task
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid demo date")
}
