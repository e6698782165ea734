use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use super::entities::{Priority, TaskValidationError};
use crate::shared::PatchField;

/// Typed batch patch over the writable task columns.
///
/// Keys outside this record are ignored on decode. `null` on a nullable
/// column clears it; on a non-nullable column it is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskBatchPatch {
    pub done: Option<bool>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub reminder: Option<bool>,
    #[serde(alias = "task")]
    pub title: Option<String>,
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub due_date: PatchField<DateTime<Utc>>,
    #[schema(value_type = Option<i32>)]
    pub estimated_time: PatchField<i32>,
}

impl TaskBatchPatch {
    pub fn is_empty(&self) -> bool {
        self.done.is_none()
            && self.priority.is_none()
            && self.category.is_none()
            && self.reminder.is_none()
            && self.title.is_none()
            && self.description.is_unset()
            && self.due_date.is_unset()
            && self.estimated_time.is_unset()
    }

    /// `true` when the patch flips tasks to done, which stamps `completed_at`.
    pub fn marks_done(&self) -> bool {
        self.done == Some(true)
    }

    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if matches!(&self.title, Some(t) if t.trim().is_empty()) {
            return Err(TaskValidationError::EmptyTitle);
        }
        if matches!(&self.category, Some(c) if c.trim().is_empty()) {
            return Err(TaskValidationError::EmptyCategory);
        }
        if matches!(self.estimated_time.as_value(), Some(m) if *m < 0) {
            return Err(TaskValidationError::NegativeEstimate);
        }
        Ok(())
    }
}

/// Sorted, duplicate-free id list for batch guards.
pub fn dedup_ids(ids: &[i32]) -> Vec<i32> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}
