use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::{Priority, Task};

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

//
// ──────────────────────────────────────────────────────────
// Filter
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    /// Required `done` value, or `None` for no restriction.
    pub fn done(&self) -> Option<bool> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Completed => Some(true),
            StatusFilter::Pending => Some(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl PriorityFilter {
    pub fn priority(&self) -> Option<Priority> {
        match self {
            PriorityFilter::All => None,
            PriorityFilter::High => Some(Priority::High),
            PriorityFilter::Medium => Some(Priority::Medium),
            PriorityFilter::Low => Some(Priority::Low),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
pub enum TaskSortField {
    #[default]
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "updatedAt")]
    UpdatedAt,
    #[serde(rename = "priority")]
    Priority,
    #[serde(rename = "alphabetical")]
    Alphabetical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Conjunctive task predicate; the owner is always added by the query adapter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
    /// `None` matches every category.
    pub category: Option<String>,
    /// Case-insensitive substring over title or description.
    pub search: Option<String>,
    pub due_date_from: Option<DateTime<Utc>>,
    pub due_date_to: Option<DateTime<Utc>>,
    pub sort_by: TaskSortField,
    pub sort_order: SortOrder,
}

impl TaskFilter {
    /// Treats `"all"` and blank strings as "no restriction".
    pub fn normalize_category(raw: Option<String>) -> Option<String> {
        raw.map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
    }

    pub fn normalize_search(raw: Option<String>) -> Option<String> {
        raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
    }
}

//
// ──────────────────────────────────────────────────────────
// Pagination
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Page 0 becomes 1, size 0 becomes the default, sizes above the cap are clamped.
    /// Pages are capped so that `page * page_size` stays within a Postgres `bigint`.
    pub fn new(page: Option<u64>, page_size: Option<u64>) -> Self {
        let page_size = match page_size {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(size) => size.min(MAX_PAGE_SIZE),
        };
        let max_page = i64::MAX as u64 / page_size;
        let page = page.filter(|p| *p > 0).unwrap_or(1).min(max_page);
        Self { page, page_size }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskPage {
    pub items: Vec<Task>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub has_more: bool,
}

impl TaskPage {
    pub fn new(items: Vec<Task>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            page_size: request.page_size,
            has_more: request.page.saturating_mul(request.page_size) < total,
        }
    }
}
