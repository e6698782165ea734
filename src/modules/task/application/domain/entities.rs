use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;

pub const DEFAULT_CATEGORY: &str = "personal";

// ============================================================================
// Priority
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

// ============================================================================
// Read models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: i32,
    pub task_id: i32,
    pub content: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub done: bool,
    #[schema(example = "medium")]
    pub priority: String,
    #[schema(example = "personal")]
    pub category: String,
    pub due_date: Option<DateTime<Utc>>,
    pub reminder: bool,
    /// Minutes.
    pub estimated_time: Option<i32>,
    pub tags: Vec<String>,
    #[schema(value_type = i32)]
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub steps: Vec<Step>,
}

// ============================================================================
// Write models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskValidationError {
    #[error("Task title cannot be empty")]
    EmptyTitle,
    #[error("Step content cannot be empty")]
    EmptyStepContent,
    #[error("Category cannot be empty")]
    EmptyCategory,
    #[error("Estimated time cannot be negative")]
    NegativeEstimate,
}

#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StepDraft {
    pub content: String,
    #[serde(default)]
    pub completed: bool,
}

impl StepDraft {
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.content.trim().is_empty() {
            return Err(TaskValidationError::EmptyStepContent);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub category: String,
    pub due_date: Option<DateTime<Utc>>,
    pub reminder: bool,
    pub estimated_time: Option<i32>,
    pub tags: Vec<String>,
    pub steps: Vec<StepDraft>,
}

impl NewTask {
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.category.trim().is_empty() {
            return Err(TaskValidationError::EmptyCategory);
        }
        if matches!(self.estimated_time, Some(m) if m < 0) {
            return Err(TaskValidationError::NegativeEstimate);
        }
        self.steps.iter().try_for_each(StepDraft::validate)
    }
}

/// Full-edit payload. `None` leaves the stored value; `Some(steps)` replaces
/// the whole step set.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTaskData {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub steps: Option<Vec<StepDraft>>,
}

impl UpdateTaskData {
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if matches!(&self.title, Some(t) if t.trim().is_empty()) {
            return Err(TaskValidationError::EmptyTitle);
        }
        match &self.steps {
            Some(steps) => steps.iter().try_for_each(StepDraft::validate),
            None => Ok(()),
        }
    }
}
