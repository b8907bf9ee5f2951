//! Project store: the explicit state container behind every mutation.
//!
//! # Responsibility
//! - Load-or-seed the collection at startup.
//! - Apply create/update/delete operations for projects, tasks and
//!   reminders, re-deriving project status after task mutations.
//! - Mirror the collection to the repository after each commit.
//!
//! # Invariants
//! - Validation failures reject the operation with the store unchanged.
//! - Update/delete against unknown ids are benign no-ops, not errors.
//! - The status roll-up runs after task mutations only; plain project edits
//!   never re-derive status.

use crate::data::demo::demo_projects;
use crate::model::project::{
    Priority, Project, ProjectId, ProjectStatus, Reminder, ReminderId, Task, TaskId, TaskStatus,
    ValidationErrors, ValidationIssue,
};
use crate::progress::roll_up_status;
use crate::repo::project_repo::{ProjectRepository, RepoError};
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Store-level error: a rejected validation or a persistence failure.
#[derive(Debug)]
pub enum StoreError {
    Validation(ValidationErrors),
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "{errors}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationErrors> for StoreError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Input for creating a project; the store assigns the id.
///
/// Defaults mirror the blank creation form: status `Planned`, priority
/// `Medium`, everything else empty. New projects start without tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub manager: String,
    pub assignees: Vec<String>,
    pub reminders: Vec<Reminder>,
}

impl ProjectDraft {
    fn into_project(self, id: ProjectId) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            priority: self.priority,
            manager: self.manager,
            assignees: self.assignees,
            tasks: Vec::new(),
            reminders: self.reminders,
        }
    }
}

/// Input for adding a task; the store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub assignee: String,
    pub status: TaskStatus,
}

impl TaskDraft {
    fn validate(&self, assignees: &[String]) -> Result<(), ValidationErrors> {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push(ValidationIssue::TaskNameRequired);
        }
        if !assignees.contains(&self.assignee) {
            issues.push(ValidationIssue::UnknownAssignee {
                assignee: self.assignee.clone(),
            });
        }

        ValidationErrors::from_issues(issues)
    }
}

/// Input for adding a reminder; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderDraft {
    pub date: NaiveDate,
    pub description: String,
}

impl ReminderDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut issues = Vec::new();
        if self.description.trim().is_empty() {
            issues.push(ValidationIssue::ReminderDescriptionRequired);
        }
        ValidationErrors::from_issues(issues)
    }
}

/// Authoritative in-memory project collection, mirrored to a repository
/// after every mutation.
pub struct ProjectStore<R: ProjectRepository> {
    repo: R,
    projects: Vec<Project>,
}

impl<R: ProjectRepository> ProjectStore<R> {
    /// Loads the saved collection, or seeds and persists the bundled demo
    /// dataset when nothing was ever saved.
    pub fn init(repo: R) -> Result<Self, StoreError> {
        match repo.load()? {
            Some(projects) => {
                info!(
                    "event=store_init module=store status=ok source=saved count={}",
                    projects.len()
                );
                Ok(Self { repo, projects })
            }
            None => {
                let projects = demo_projects();
                repo.save(&projects)?;
                info!(
                    "event=store_init module=store status=ok source=demo count={}",
                    projects.len()
                );
                Ok(Self { repo, projects })
            }
        }
    }

    /// The full collection in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Looks up one project by id.
    pub fn get_project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Tasks of one project, or `None` when the id is unknown.
    pub fn tasks(&self, project_id: ProjectId) -> Option<&[Task]> {
        self.get_project(project_id)
            .map(|project| project.tasks.as_slice())
    }

    /// Reminders of one project, or `None` when the id is unknown.
    pub fn reminders(&self, project_id: ProjectId) -> Option<&[Reminder]> {
        self.get_project(project_id)
            .map(|project| project.reminders.as_slice())
    }

    /// Validates and appends a new project with a fresh id.
    pub fn create_project(&mut self, draft: ProjectDraft) -> Result<ProjectId, StoreError> {
        let project = draft.into_project(Uuid::new_v4());
        project.validate()?;

        let id = project.id;
        self.projects.push(project);
        self.persist()?;
        info!("event=project_create module=store status=ok project_id={id}");
        Ok(id)
    }

    /// Validates and replaces the project with a matching id.
    ///
    /// Unknown ids are a benign no-op. Plain edits never re-derive status.
    pub fn update_project(&mut self, updated: Project) -> Result<(), StoreError> {
        updated.validate()?;

        let Some(slot) = self
            .projects
            .iter_mut()
            .find(|project| project.id == updated.id)
        else {
            warn!(
                "event=project_update module=store status=skipped reason=not_found project_id={}",
                updated.id
            );
            return Ok(());
        };

        let id = updated.id;
        *slot = updated;
        self.persist()?;
        info!("event=project_update module=store status=ok project_id={id}");
        Ok(())
    }

    /// Removes the project with a matching id; unknown ids are a no-op.
    pub fn delete_project(&mut self, id: ProjectId) -> Result<(), StoreError> {
        let before = self.projects.len();
        self.projects.retain(|project| project.id != id);
        if self.projects.len() == before {
            warn!(
                "event=project_delete module=store status=skipped reason=not_found project_id={id}"
            );
            return Ok(());
        }

        self.persist()?;
        info!("event=project_delete module=store status=ok project_id={id}");
        Ok(())
    }

    /// Validates and appends a task with a fresh id, then re-derives the
    /// project status.
    ///
    /// Returns `Ok(None)` when the project id is unknown.
    pub fn add_task(
        &mut self,
        project_id: ProjectId,
        draft: TaskDraft,
    ) -> Result<Option<TaskId>, StoreError> {
        let Some(project) = self
            .projects
            .iter_mut()
            .find(|project| project.id == project_id)
        else {
            warn!(
                "event=task_add module=store status=skipped reason=not_found project_id={project_id}"
            );
            return Ok(None);
        };

        draft.validate(&project.assignees)?;

        let task = Task {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            assignee: draft.assignee,
            status: draft.status,
        };
        let task_id = task.id;
        project.tasks.push(task);
        roll_up_status(project);

        self.persist()?;
        info!("event=task_add module=store status=ok project_id={project_id} task_id={task_id}");
        Ok(Some(task_id))
    }

    /// Replaces the matching task's status, then re-derives the project
    /// status. Unknown project or task ids are a no-op.
    pub fn update_task_status(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
        new_status: TaskStatus,
    ) -> Result<(), StoreError> {
        let Some(project) = self
            .projects
            .iter_mut()
            .find(|project| project.id == project_id)
        else {
            warn!(
                "event=task_update module=store status=skipped reason=not_found project_id={project_id}"
            );
            return Ok(());
        };

        let Some(task) = project.tasks.iter_mut().find(|task| task.id == task_id) else {
            warn!(
                "event=task_update module=store status=skipped reason=not_found project_id={project_id} task_id={task_id}"
            );
            return Ok(());
        };

        task.status = new_status;
        roll_up_status(project);

        self.persist()?;
        info!(
            "event=task_update module=store status=ok project_id={project_id} task_id={task_id}"
        );
        Ok(())
    }

    /// Removes the matching task, then re-derives the project status.
    /// Unknown project or task ids are a no-op.
    pub fn delete_task(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> Result<(), StoreError> {
        let Some(project) = self
            .projects
            .iter_mut()
            .find(|project| project.id == project_id)
        else {
            warn!(
                "event=task_delete module=store status=skipped reason=not_found project_id={project_id}"
            );
            return Ok(());
        };

        let before = project.tasks.len();
        project.tasks.retain(|task| task.id != task_id);
        if project.tasks.len() == before {
            warn!(
                "event=task_delete module=store status=skipped reason=not_found project_id={project_id} task_id={task_id}"
            );
            return Ok(());
        }
        roll_up_status(project);

        self.persist()?;
        info!(
            "event=task_delete module=store status=ok project_id={project_id} task_id={task_id}"
        );
        Ok(())
    }

    /// Validates and appends a reminder with a fresh id. No status roll-up.
    ///
    /// Returns `Ok(None)` when the project id is unknown.
    pub fn add_reminder(
        &mut self,
        project_id: ProjectId,
        draft: ReminderDraft,
    ) -> Result<Option<ReminderId>, StoreError> {
        let Some(project) = self
            .projects
            .iter_mut()
            .find(|project| project.id == project_id)
        else {
            warn!(
                "event=reminder_add module=store status=skipped reason=not_found project_id={project_id}"
            );
            return Ok(None);
        };

        draft.validate()?;

        let reminder = Reminder::new(draft.date, draft.description);
        let reminder_id = reminder.id;
        project.reminders.push(reminder);

        self.persist()?;
        info!(
            "event=reminder_add module=store status=ok project_id={project_id} reminder_id={reminder_id}"
        );
        Ok(Some(reminder_id))
    }

    /// Removes the matching reminder. No status roll-up; unknown ids are a
    /// no-op.
    pub fn remove_reminder(
        &mut self,
        project_id: ProjectId,
        reminder_id: ReminderId,
    ) -> Result<(), StoreError> {
        let Some(project) = self
            .projects
            .iter_mut()
            .find(|project| project.id == project_id)
        else {
            warn!(
                "event=reminder_remove module=store status=skipped reason=not_found project_id={project_id}"
            );
            return Ok(());
        };

        let before = project.reminders.len();
        project.reminders.retain(|reminder| reminder.id != reminder_id);
        if project.reminders.len() == before {
            warn!(
                "event=reminder_remove module=store status=skipped reason=not_found project_id={project_id} reminder_id={reminder_id}"
            );
            return Ok(());
        }

        self.persist()?;
        info!(
            "event=reminder_remove module=store status=ok project_id={project_id} reminder_id={reminder_id}"
        );
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.repo.save(&self.projects)?;
        Ok(())
    }
}
