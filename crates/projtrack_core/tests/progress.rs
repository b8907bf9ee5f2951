use chrono::NaiveDate;
use projtrack_core::{
    completion_percentage, dashboard_stats, format_date, roll_up_status, upcoming_reminders,
    Project, ProjectStatus, Reminder, Task, TaskStatus,
};
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn task(status: TaskStatus) -> Task {
    let mut task = Task::new("task", "Jane Smith");
    task.status = status;
    task
}

fn project_with_tasks(statuses: &[TaskStatus]) -> Project {
    let mut project = Project::new("Website Redesign");
    project.assignees.push("Jane Smith".to_string());
    project.tasks = statuses.iter().map(|status| task(*status)).collect();
    project
}

#[test]
fn completion_of_empty_task_list_is_zero() {
    assert_eq!(completion_percentage(&[]), 0);
}

#[test]
fn completion_of_all_done_is_one_hundred() {
    let tasks = [task(TaskStatus::Done), task(TaskStatus::Done)];
    assert_eq!(completion_percentage(&tasks), 100);
}

#[test]
fn completion_of_none_done_is_zero() {
    let tasks = [task(TaskStatus::Todo), task(TaskStatus::InProgress)];
    assert_eq!(completion_percentage(&tasks), 0);
}

#[test]
fn completion_rounds_one_of_three_to_thirty_three() {
    let tasks = [
        task(TaskStatus::Done),
        task(TaskStatus::Todo),
        task(TaskStatus::Todo),
    ];
    assert_eq!(completion_percentage(&tasks), 33);
}

#[test]
fn completion_rounds_two_of_three_up_to_sixty_seven() {
    let tasks = [
        task(TaskStatus::Done),
        task(TaskStatus::Done),
        task(TaskStatus::Todo),
    ];
    assert_eq!(completion_percentage(&tasks), 67);
}

#[test]
fn completion_stays_within_bounds_for_every_ratio() {
    for total in 1..=8usize {
        for done in 0..=total {
            let mut tasks = vec![task(TaskStatus::Done); done];
            tasks.extend(vec![task(TaskStatus::Todo); total - done]);

            let percentage = completion_percentage(&tasks);
            assert!(percentage <= 100, "{done}/{total} gave {percentage}");
        }
    }
}

#[test]
fn roll_up_with_no_tasks_keeps_user_assigned_status() {
    let mut project = project_with_tasks(&[]);
    project.status = ProjectStatus::OnHold;

    roll_up_status(&mut project);
    assert_eq!(project.status, ProjectStatus::OnHold);
}

#[test]
fn roll_up_sets_completed_when_every_task_is_done() {
    let mut project = project_with_tasks(&[TaskStatus::Done, TaskStatus::Done]);
    project.status = ProjectStatus::Planned;

    roll_up_status(&mut project);
    assert_eq!(project.status, ProjectStatus::Completed);
}

#[test]
fn roll_up_sets_in_progress_when_any_task_is_open() {
    let mut project = project_with_tasks(&[TaskStatus::Done, TaskStatus::Todo]);

    roll_up_status(&mut project);
    assert_eq!(project.status, ProjectStatus::InProgress);
}

#[test]
fn roll_up_overrides_on_hold_once_tasks_exist() {
    let mut project = project_with_tasks(&[TaskStatus::Done, TaskStatus::Todo]);
    project.status = ProjectStatus::OnHold;

    roll_up_status(&mut project);
    assert_eq!(project.status, ProjectStatus::InProgress);
}

#[test]
fn dashboard_stats_counts_statuses_and_tasks() {
    let mut completed = project_with_tasks(&[TaskStatus::Done]);
    completed.status = ProjectStatus::Completed;
    let in_progress = project_with_tasks(&[TaskStatus::Done, TaskStatus::Todo]);
    let mut on_hold = project_with_tasks(&[]);
    on_hold.status = ProjectStatus::OnHold;

    let stats = dashboard_stats(&[completed, in_progress, on_hold]);
    assert_eq!(stats.total_projects, 3);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.total_tasks, 3);
}

#[test]
fn upcoming_reminders_drop_past_dates_and_sort_ascending() {
    let mut project = Project::new("Website Redesign");
    project.reminders = vec![
        Reminder::with_id(Uuid::from_u128(1), date(2025, 3, 1), "Handoff"),
        Reminder::with_id(Uuid::from_u128(2), date(2025, 1, 5), "Kickoff recap"),
        Reminder::with_id(Uuid::from_u128(3), date(2025, 2, 10), "Design Review"),
    ];

    let today = date(2025, 1, 20);
    let upcoming = upcoming_reminders(&project, today);

    let descriptions: Vec<&str> = upcoming
        .iter()
        .map(|reminder| reminder.description.as_str())
        .collect();
    assert_eq!(descriptions, ["Design Review", "Handoff"]);
}

#[test]
fn upcoming_reminders_include_today() {
    let mut project = Project::new("Website Redesign");
    project.reminders = vec![Reminder::with_id(
        Uuid::from_u128(1),
        date(2025, 1, 20),
        "Design Review",
    )];

    let upcoming = upcoming_reminders(&project, date(2025, 1, 20));
    assert_eq!(upcoming.len(), 1);
}

#[test]
fn format_date_renders_short_month_day_year() {
    assert_eq!(format_date(date(2025, 1, 20)), "Jan 20, 2025");
    assert_eq!(format_date(date(2025, 3, 5)), "Mar 5, 2025");
}
