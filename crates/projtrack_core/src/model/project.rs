//! Project domain model.
//!
//! # Responsibility
//! - Define the project record and its owned task/reminder records.
//! - Provide save-path validation with per-field error reporting.
//!
//! # Invariants
//! - `id` is stable and unique across the store.
//! - `end_date`, when both dates are set, is strictly after `start_date`.
//! - `status` is consistent with `tasks` per the roll-up rule whenever the
//!   task list is non-empty (see [`crate::progress::roll_up_status`]).
//!
//! Serde field names keep the persisted wire format of the stored collection
//! (camelCase dates, display-string enum values), so saved data round-trips
//! without a mapping layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;
/// Stable identifier for a task inside its owning project.
pub type TaskId = Uuid;
/// Stable identifier for a reminder inside its owning project.
pub type ReminderId = Uuid;

/// Lifecycle state of a project.
///
/// `Planned` and `NotStarted` are user-assigned only; `InProgress` and
/// `Completed` are overwritten by the task roll-up once tasks exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    Planned,
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl ProjectStatus {
    /// Wire/display name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Sort rank: `High=0 < Medium=1 < Low=2`.
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Wire/display name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

/// A unit of work owned by exactly one project.
///
/// `assignee` must be a member of the owning project's `assignees`; the
/// store enforces this when a task is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    /// Optional free text; older saved data may omit the field entirely.
    #[serde(default)]
    pub description: String,
    pub assignee: String,
    pub status: TaskStatus,
}

impl Task {
    /// Creates a task with a generated stable ID and status `Todo`.
    pub fn new(name: impl Into<String>, assignee: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, assignee)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by demo-data and test paths where identity is fixed up front.
    pub fn with_id(
        id: TaskId,
        name: impl Into<String>,
        assignee: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            assignee: assignee.into(),
            status: TaskStatus::Todo,
        }
    }
}

/// A dated note owned by exactly one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub date: NaiveDate,
    pub description: String,
}

impl Reminder {
    /// Creates a reminder with a generated stable ID.
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), date, description)
    }

    /// Creates a reminder with a caller-provided stable ID.
    pub fn with_id(id: ReminderId, date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            id,
            date,
            description: description.into(),
        }
    }
}

/// Canonical project record, the root of the tracked entity tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    #[serde(rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub manager: String,
    /// Non-empty for a valid saved project.
    pub assignees: Vec<String>,
    pub tasks: Vec<Task>,
    pub reminders: Vec<Reminder>,
}

impl Project {
    /// Creates a project with a generated stable ID and blank-form defaults
    /// (status `Planned`, priority `Medium`, empty collections).
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a project with a caller-provided stable ID.
    pub fn with_id(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            start_date: None,
            end_date: None,
            status: ProjectStatus::default(),
            priority: Priority::default(),
            manager: String::new(),
            assignees: Vec::new(),
            tasks: Vec::new(),
            reminders: Vec::new(),
        }
    }

    /// Checks the save-path invariants, collecting every failed field.
    ///
    /// # Contract
    /// - `name` must be non-empty after trimming.
    /// - When both dates are present, `end_date` must be strictly after
    ///   `start_date`.
    /// - `assignees` must be non-empty.
    ///
    /// Returns all failures at once so a caller can surface them per field.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push(ValidationIssue::NameRequired);
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end <= start {
                issues.push(ValidationIssue::EndDateNotAfterStart { start, end });
            }
        }
        if self.assignees.is_empty() {
            issues.push(ValidationIssue::AssigneesEmpty);
        }

        ValidationErrors::from_issues(issues)
    }
}

/// Single failed validation check, tied to the field it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Project name is blank.
    NameRequired,
    /// Both dates set but the end does not fall strictly after the start.
    EndDateNotAfterStart { start: NaiveDate, end: NaiveDate },
    /// Project has no assignees.
    AssigneesEmpty,
    /// Task name is blank.
    TaskNameRequired,
    /// Task assignee is not a member of the owning project's assignees.
    UnknownAssignee { assignee: String },
    /// Reminder description is blank.
    ReminderDescriptionRequired,
}

impl ValidationIssue {
    /// Name of the input field this issue should be surfaced under.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameRequired => "name",
            Self::EndDateNotAfterStart { .. } => "endDate",
            Self::AssigneesEmpty => "assignees",
            Self::TaskNameRequired => "taskName",
            Self::UnknownAssignee { .. } => "assignee",
            Self::ReminderDescriptionRequired => "reminderDescription",
        }
    }
}

impl Display for ValidationIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameRequired => write!(f, "Project name is required"),
            Self::EndDateNotAfterStart { start, end } => {
                write!(f, "End date ({end}) must be after start date ({start})")
            }
            Self::AssigneesEmpty => write!(f, "At least one assignee is required"),
            Self::TaskNameRequired => write!(f, "Task name is required"),
            Self::UnknownAssignee { assignee } => {
                write!(f, "Assignee `{assignee}` is not a member of this project")
            }
            Self::ReminderDescriptionRequired => write!(f, "Reminder description is required"),
        }
    }
}

/// All validation failures of one rejected operation.
///
/// Never empty: construction through [`ValidationErrors::from_issues`]
/// yields `Ok(())` for an empty issue list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    /// Converts a collected issue list into a validation outcome.
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Result<(), Self> {
        if issues.is_empty() {
            Ok(())
        } else {
            Err(Self { issues })
        }
    }

    /// The individual failed checks, in validation order.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Field-name to message mapping for per-field surfacing.
    pub fn field_messages(&self) -> BTreeMap<&'static str, String> {
        self.issues
            .iter()
            .map(|issue| (issue.field(), issue.to_string()))
            .collect()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for issue in &self.issues {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{issue}")?;
            first = false;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}
